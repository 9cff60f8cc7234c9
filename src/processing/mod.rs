//! Photo re-encoding.
//!
//! # Architecture
//!
//! - `surface`: Decoding into a pixel surface and redrawing it onto a blank one.
//! - `encoders`: Per-format serialization of a surface.
//! - [`reencode`]: The decode ⇢ draw ⇢ encode transform.
//! - `executor`: [`BatchExecutor`] for several photos at once.
//! - `upload`: Multipart parts built from scrubbed photos.

mod surface;
mod encoders;
mod reencode;
mod executor;
mod upload;

pub use reencode::{reencode, reencode_with_report};
pub use executor::{BatchExecutor, BatchOutcome};
pub use upload::{PreparedUpload, UploadField, UploadPart, prepare_upload};
