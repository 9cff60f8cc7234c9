//! Error types for photo scrubbing.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.
//! Every error serializes to a plain message so a UI layer can surface it as-is.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors raised before a photo is handed to the transform.
#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Declared media type is not on the allow-list
    #[error("Invalid file format: {0}. Only JPEG, PNG and GIF are allowed")]
    UnsupportedMediaType(String),
    /// File exceeds the configured size cap
    #[error("File size too large ({} bytes). Maximum size is {}MB", .size, .max / (1024 * 1024))]
    TooLarge { size: u64, max: u64 },
    /// Zero-length file
    #[error("File is empty: {0}")]
    Empty(String),
    /// Filename extension missing or inconsistent with the media type
    #[error("Extension error: {0}")]
    Extension(String),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the crate.
///
/// `Decode` and `Encode` are the two terminal outcomes of a failed re-encode;
/// they are kept distinct so callers can tell the user which side failed.
#[derive(Error, Debug, Serialize, Clone, PartialEq)]
pub enum ScrubError {
    /// Asset or settings validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input bytes could not be interpreted as an image of the declared type
    #[error("Decode error: {0}")]
    Decode(String),

    /// Pixel surface could not be serialized back into the declared type
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Blocking worker failed outside of the codec
    #[error("Processing error: {0}")]
    Processing(String),
}

/// Convenience result type for scrub operations.
pub type ScrubResult<T> = Result<T, ScrubError>;

impl ScrubError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    /// True for the two codec failures the transform itself can produce.
    pub fn is_codec_failure(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Encode(_))
    }
}

impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn extension(msg: impl Into<String>) -> Self {
        Self::Extension(msg.into())
    }
}

// Convert std::io::Error to ScrubError
impl From<io::Error> for ScrubError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to ScrubError
impl From<PathError> for ScrubError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_message_reports_limit_in_megabytes() {
        let err = ValidationError::TooLarge { size: 6_000_000, max: 5 * 1024 * 1024 };
        assert_eq!(
            err.to_string(),
            "File size too large (6000000 bytes). Maximum size is 5MB"
        );
    }

    #[test]
    fn path_error_lifts_into_validation() {
        let err: ScrubError = PathError::NotFound(PathBuf::from("/missing.png")).into();
        assert!(matches!(err, ScrubError::Validation(ValidationError::Path(_))));
        assert!(!err.is_codec_failure());
    }

    #[test]
    fn codec_failures_are_distinct() {
        assert!(ScrubError::decode("bad").is_codec_failure());
        assert!(ScrubError::encode("bad").is_codec_failure());
        assert_ne!(ScrubError::decode("x"), ScrubError::encode("x"));
    }

    #[test]
    fn errors_serialize_for_the_frontend() {
        let json = serde_json::to_value(ScrubError::decode("truncated")).unwrap();
        assert_eq!(json, serde_json::json!({ "Decode": "truncated" }));
    }
}
