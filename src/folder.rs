use crate::Error;
use clap::ValueEnum;
use std::{io::ErrorKind, path::Path};
use tokio::fs;

/// What to do when an item's output already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Existing {
    /// Refuse to touch an item whose directory already exists
    Fail,
    /// Keep files already on disk and only pull the missing ones
    #[default]
    Skip,
    /// Pull every file again, replacing what is on disk
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    Reused,
}

/// Creates the output directory for one item, along with any missing parents.
pub async fn provision(dir: &Path, existing: Existing) -> Result<Provisioned, Error> {
    let create_dir_error = |source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    };

    if let Some(parent) = dir.parent() {
        fs::create_dir_all(parent).await.map_err(create_dir_error)?;
    }
    match fs::create_dir(dir).await {
        Ok(()) => Ok(Provisioned::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => match existing {
            Existing::Fail => Err(Error::DirectoryExists(dir.to_path_buf())),
            Existing::Skip | Existing::Overwrite => Ok(Provisioned::Reused),
        },
        Err(e) => Err(create_dir_error(e)),
    }
}
