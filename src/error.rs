use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManageError {
    #[error("folder for post already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("post not found: {0}")]
    NotFound(String),

    #[error("invalid path: {0}. must be under the content dir")]
    InvalidPath(String),

    /// Slugs end up both in a directory name and inside a TOML string
    #[error("invalid slug: {0:?}. use lowercase letters, digits and single hyphens (e.g. hello-world)")]
    InvalidSlug(String),

    #[error("error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Config(String),
}

impl ManageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ManageError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ManageError>;
