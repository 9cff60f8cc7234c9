//! Core types shared by validation and processing.
//!
//! - [`ImageAsset`]: A photo as picked by the user (filename, media type, bytes)
//! - [`ScrubSettings`]: Limits and encoder configuration
//! - [`ScrubReport`]: Result statistics for one re-encoded photo
//! - [`Progress`]: Progress events for batch operations

mod asset;
mod types;
mod progress;

pub use asset::ImageAsset;
pub use types::{
    ScrubSettings, ScrubReport, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_FILE_SIZE,
};
pub use progress::{Progress, ProgressType};
