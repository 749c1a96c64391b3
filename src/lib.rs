pub mod args;
pub mod download;
pub mod error;
pub mod extract;
pub mod folder;
pub mod job;
pub mod logging;
pub mod names;
pub mod response;
pub mod runner;

pub use error::Error;
