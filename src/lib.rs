// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;

// Public exports for external consumers
pub use crate::core::{ImageAsset, Progress, ProgressType, ScrubReport, ScrubSettings};
pub use crate::utils::{MediaType, PathError, ScrubError, ScrubResult, ValidationError, init_tracing, validate_asset};
pub use crate::processing::{
    BatchExecutor, BatchOutcome, PreparedUpload, UploadField, UploadPart, prepare_upload, reencode,
    reencode_with_report,
};
