use std::io;
use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error>;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("could not open {} to probe its format: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unreadable audio file {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, Error)]
pub enum PlanError {
    /// Two plan entries would land on the same file. The resolver must never
    /// produce this.
    #[error("destination {} assigned to both {} and {}", destination.display(), first.display(), second.display())]
    DestinationCollision {
        destination: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Fs(#[from] FsError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
