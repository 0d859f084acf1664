//! Error types for value operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for value operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors that can occur while operating on a value's resource.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The handle was already released.
    #[error("File handle closed: {path}")]
    Closed { path: PathBuf },

    /// Content is larger than the configured read ceiling.
    #[error("Content of {path} exceeds limit of {limit} bytes (read {size})")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ValueError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Get the path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Closed { path }
            | Self::TooLarge { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_error_io() {
        let err = ValueError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ValueError::PermissionDenied { .. }));

        let err = ValueError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ValueError::NotFound { .. }));

        let err = ValueError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short"),
        );
        assert!(matches!(err, ValueError::Io { .. }));
    }

    #[test]
    fn test_value_error_path() {
        let err = ValueError::Closed {
            path: "/test/path".into(),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("/test/path")));
        assert!(err.to_string().contains("closed"));
    }
}
