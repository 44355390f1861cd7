//! Error types for the Folio shell

use thiserror::Error;

/// Main error type for Folio shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// The fragment addressed by a page key does not exist
    #[error("Fragment not found: {0}")]
    FragmentNotFound(String),

    /// The fragment source answered with a non-success status
    #[error("Could not load page {key}: status {status}")]
    FragmentStatus { key: String, status: u16 },

    /// Transport-level failure while fetching a fragment
    #[error("Transport error: {0}")]
    Transport(String),

    /// Page key cannot be resolved by the source (e.g. escapes the site root)
    #[error("Invalid page key: {0}")]
    InvalidKey(String),

    /// Clipboard unavailable or the write was rejected
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// True for the failures that count as a fragment load failure.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            ShellError::FragmentNotFound(_)
                | ShellError::FragmentStatus { .. }
                | ShellError::Transport(_)
                | ShellError::InvalidKey(_)
        )
    }
}

/// Result type alias using ShellError
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::FragmentStatus {
            key: "pages/cv.html".to_string(),
            status: 404,
        };
        assert_eq!(format!("{}", err), "Could not load page pages/cv.html: status 404");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ShellError = io_err.into();
        assert!(matches!(err, ShellError::Io(_)));
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_load_failure_kinds() {
        assert!(ShellError::FragmentNotFound("x".into()).is_load_failure());
        assert!(ShellError::Transport("reset".into()).is_load_failure());
        assert!(!ShellError::Clipboard("busy".into()).is_load_failure());
    }
}
