//! Error types for `folio-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Apart from configuration and I/O failures, every variant is non-fatal:
/// the widgets surface them as transient notices or swallow them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An upload source is not a regular file (FIFO, socket, device node).
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// An upload source exceeds the in-memory size ceiling.
    #[error("file is too large ({size} bytes, limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The gallery already holds the maximum number of images.
    ///
    /// The display text is the user-facing notice.
    #[error("You can only add up to {0} images.")]
    CapacityExceeded(usize),

    /// The selected file is not a recognised image format.
    #[error("{0} is not an image.")]
    NotAnImage(String),

    /// The public-image manifest could not be fetched or parsed.
    #[error("manifest unavailable: {0}")]
    Manifest(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `folio-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/cat.png"));
        assert_eq!(err.to_string(), "path not found: /missing/cat.png");
    }

    #[test]
    fn capacity_exceeded_is_the_user_notice() {
        let err = CoreError::CapacityExceeded(3);
        assert_eq!(err.to_string(), "You can only add up to 3 images.");
    }

    #[test]
    fn capacity_exceeded_tracks_the_limit() {
        let err = CoreError::CapacityExceeded(5);
        assert_eq!(err.to_string(), "You can only add up to 5 images.");
    }

    #[test]
    fn too_large_reports_both_sizes() {
        let err = CoreError::TooLarge { size: 10, limit: 4 };
        assert_eq!(err.to_string(), "file is too large (10 bytes, limit 4)");
    }

    #[test]
    fn not_an_image_names_the_file() {
        let err = CoreError::NotAnImage("notes.txt".to_string());
        assert_eq!(err.to_string(), "notes.txt is not an image.");
    }

    #[test]
    fn manifest_displays_reason() {
        let err = CoreError::Manifest("HTTP 404".to_string());
        assert_eq!(err.to_string(), "manifest unavailable: HTTP 404");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }
}
