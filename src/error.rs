//! Error handling for treedump
//!
//! Every failure is an I/O failure at heart. The variants only exist so the
//! diagnostic can name the path or phase that failed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for tree walking and writing
#[derive(Error, Debug)]
pub enum TreeError {
    /// A directory could not be listed
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created
    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a line to the output sink failed
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TreeError {
    /// The `io::ErrorKind` this error maps to when surfaced as an `io::Error`
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            TreeError::Write(e) => e.kind(),
            TreeError::ReadDir { source, .. } | TreeError::CreateOutput { source, .. } => {
                source.kind()
            }
            TreeError::PathNotFound(_) => io::ErrorKind::NotFound,
            TreeError::NotADirectory(_) | TreeError::InvalidArgument(_) => {
                io::ErrorKind::InvalidInput
            }
        }
    }
}

/// Specialized Result type for treedump operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Creates a TreeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TreeError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// The binary returns io::Result, so keep the original kind when converting
impl From<TreeError> for io::Error {
    fn from(err: TreeError) -> Self {
        io::Error::new(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        ensure!(n > 0, InvalidArgument, "expected a positive number, got {}", n);
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(3).unwrap(), 3);
        let err = check_positive(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected a positive number, got -1"
        );
    }

    #[test]
    fn test_conversion_keeps_kind() {
        let err: io::Error = error!(PathNotFound, "missing").into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        let err: io::Error = TreeError::ReadDir {
            path: PathBuf::from("locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("locked"));
    }
}
