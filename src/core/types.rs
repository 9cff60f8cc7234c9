//! Core types for scrub settings and results.

use serde::{Deserialize, Serialize};
use crate::utils::{MediaType, ScrubResult, ValidationError};

/// Upload size cap enforced before re-encoding (5 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
/// JPEG quality used when re-encoding; close to a canvas `toBlob` default.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Configuration for validating and re-encoding photos.
///
/// Deserializes from camelCase JSON; every field falls back to its default
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrubSettings {
    /// Largest accepted input in bytes
    pub max_file_size: u64,
    /// Media types accepted for upload
    pub allowed_types: Vec<MediaType>,
    /// JPEG encoder quality (1-100)
    pub jpeg_quality: u8,
    /// Upper bound on transforms running at once in a batch
    pub max_concurrency: usize,
}

impl Default for ScrubSettings {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: MediaType::ALL.to_vec(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl ScrubSettings {
    /// Parses and validates settings from JSON.
    pub fn from_json(json: &str) -> ScrubResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| ValidationError::settings(format!("Invalid settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ValidationError::settings(format!(
                "Invalid JPEG quality: {}. Must be between 1 and 100",
                self.jpeg_quality
            )));
        }

        if self.max_concurrency == 0 {
            return Err(ValidationError::settings("Concurrency cannot be 0"));
        }

        if self.max_file_size == 0 {
            return Err(ValidationError::settings("Maximum file size cannot be 0"));
        }

        if self.allowed_types.is_empty() {
            return Err(ValidationError::settings("At least one media type must be allowed"));
        }

        Ok(())
    }

    pub fn allows(&self, media_type: MediaType) -> bool {
        self.allowed_types.contains(&media_type)
    }
}

/// Result of re-encoding one photo.
///
/// Contains the original and scrubbed sizes along with the pixel dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrubReport {
    pub filename: String,
    pub media_type: MediaType,
    pub width: u32,
    pub height: u32,
    /// Input size in bytes
    pub original_size: u64,
    /// Output size in bytes
    pub scrubbed_size: u64,
    /// Bytes saved (negative if the file grew)
    pub saved_bytes: i64,
    /// Saved bytes as a percentage of the original size
    pub compression_ratio: f64,
}

impl ScrubReport {
    pub fn new(
        filename: impl Into<String>,
        media_type: MediaType,
        (width, height): (u32, u32),
        original_size: u64,
        scrubbed_size: u64,
    ) -> Self {
        let saved_bytes = original_size as i64 - scrubbed_size as i64;
        let compression_ratio = if original_size > 0 {
            saved_bytes as f64 / original_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            filename: filename.into(),
            media_type,
            width,
            height,
            original_size,
            scrubbed_size,
            saved_bytes,
            compression_ratio,
        }
    }
}
