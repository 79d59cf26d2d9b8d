//! Error types for the Gopher application
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains, so the log line
//! for a failed fetch names both the reference and the transport or decode
//! error that caused it.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the Gopher application
#[derive(Debug, Error)]
pub enum GopherError {
    /// Fetching or decoding an image reference failed
    #[error("Failed to load image resource '{reference}': {source}")]
    ResourceLoadFailure {
        /// The reference that could not be loaded
        reference: String,
        /// Underlying transport, file system or decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The image list has no entries, so there is nothing to cycle through
    #[error("Image list is empty")]
    EmptyImageList,

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GopherError {
    /// Wrap any error as a load failure for `reference`
    pub fn load_failure(
        reference: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ResourceLoadFailure {
            reference: reference.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for Gopher operations
pub type Result<T> = std::result::Result<T, GopherError>;

/// Convert an error to a user-friendly message
///
/// Returns a message suitable for an error dialog, with a short hint on
/// how to fix the problem.
pub fn get_user_friendly_error(error: &GopherError) -> String {
    match error {
        GopherError::ResourceLoadFailure { reference, .. } => {
            format!(
                "Could not load the image:\n{reference}\n\n\
                 Please check your network connection.\n\
                 The previous image stays on screen."
            )
        }
        GopherError::EmptyImageList => "No images are configured.\n\n\
             Add at least one entry to \"images\" in config.json."
            .to_string(),
        GopherError::ConfigError(_) => "Failed to load configuration.\n\n\
             Check that config.json is readable and well formed."
            .to_string(),
        GopherError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        GopherError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = GopherError::EmptyImageList;
        assert_eq!(error.to_string(), "Image list is empty");
    }

    #[test]
    fn test_load_failure_display_names_reference_and_source() {
        let error =
            GopherError::load_failure("https://example.com/a.jpg", StringError::new("timed out"));
        assert_eq!(
            error.to_string(),
            "Failed to load image resource 'https://example.com/a.jpg': timed out"
        );
    }

    #[test]
    fn test_load_failure_preserves_source() {
        use std::error::Error as _;

        let error = GopherError::load_failure("a.png", StringError::new("bad magic"));
        let source = error.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "bad magic");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = GopherError::load_failure("b.jpg", StringError::new("404"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("b.jpg"));
        assert!(message.contains("previous image"));

        let message = get_user_friendly_error(&GopherError::EmptyImageList);
        assert!(message.contains("config.json"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GopherError = io_error.into();
        assert!(matches!(error, GopherError::IoError(_)));
    }
}
