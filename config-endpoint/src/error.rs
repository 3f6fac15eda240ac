use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by [`crate::ConfigStore`] operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{source}")]
    NotFound { path: PathBuf, source: io::Error },

    #[error("{source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to serialize document: {source}")]
    Serialize { source: serde_json::Error },
}

impl StoreError {
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Document path the failing operation targeted, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StoreError::NotFound { path, .. } | StoreError::Io { path, .. } => Some(path),
            StoreError::Serialize { .. } => None,
        }
    }

    /// POSIX-style error code string for the error envelope.
    pub fn errno_code(&self) -> String {
        match self {
            StoreError::NotFound { source, .. } | StoreError::Io { source, .. } => {
                errno_code(source)
            }
            StoreError::Serialize { .. } => "EINVAL".to_string(),
        }
    }
}

/// Map an I/O error to the classic errno spelling (`ENOENT`, `EACCES`, ...).
///
/// Kinds without a classic spelling fall back to the `ErrorKind` debug name.
pub fn errno_code(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "ENOENT".to_string(),
        io::ErrorKind::PermissionDenied => "EACCES".to_string(),
        io::ErrorKind::AlreadyExists => "EEXIST".to_string(),
        io::ErrorKind::InvalidInput => "EINVAL".to_string(),
        io::ErrorKind::TimedOut => "ETIMEDOUT".to_string(),
        io::ErrorKind::Interrupted => "EINTR".to_string(),
        io::ErrorKind::BrokenPipe => "EPIPE".to_string(),
        io::ErrorKind::IsADirectory => "EISDIR".to_string(),
        io::ErrorKind::NotADirectory => "ENOTDIR".to_string(),
        io::ErrorKind::DirectoryNotEmpty => "ENOTEMPTY".to_string(),
        io::ErrorKind::StorageFull => "ENOSPC".to_string(),
        io::ErrorKind::ReadOnlyFilesystem => "EROFS".to_string(),
        kind => format!("{:?}", kind),
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
