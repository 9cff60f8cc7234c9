pub mod error;
pub mod validation;
pub mod formats;
pub mod logging;

pub use error::{ScrubError, ScrubResult, ValidationError, PathError};
pub use validation::validate_asset;
pub use formats::{MediaType, extension_of, media_type_from_filename};
pub use logging::init_tracing;
