use std::{io, path::PathBuf};

use thiserror::Error;
use tokio::time::Duration;
use url::Url;

use crate::extract::ExtractError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("unable to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to build the HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} did not finish within {after:?}")]
    Timeout { url: Url, after: Duration },

    #[error("no resource path found in {url}")]
    Extract {
        url: Url,
        #[source]
        source: ExtractError,
    },

    #[error("unable to write bytes to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} cannot be used as a base URL")]
    Base(Url),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}
