//! Source error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading Suricata files
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file does not exist (Suricata not running yet, wrong path)
    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    /// Any other I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(path.to_path_buf())
        } else {
            SourceError::Io(err)
        }
    }
}

/// Result type alias for source operations
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err = SourceError::from_io(
            std::path::Path::new("/nope/eve.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SourceError::NotFound(_)));
        assert_eq!(err.to_string(), "File not found: \"/nope/eve.json\"");

        let err = SourceError::from_io(
            std::path::Path::new("/root/eve.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, SourceError::Io(_)));
    }
}
