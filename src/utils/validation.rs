use crate::core::{ImageAsset, ScrubSettings};
use crate::utils::{ScrubResult, ValidationError, extension_of};

/// Checks a photo against the upload rules before it is re-encoded.
///
/// Order: settings, emptiness, media type allow-list, size cap, extension.
pub fn validate_asset(asset: &ImageAsset, settings: &ScrubSettings) -> ScrubResult<()> {
    settings.validate()?;

    if asset.is_empty() {
        return Err(ValidationError::Empty(asset.filename().to_string()).into());
    }

    let media_type = asset.media_type();
    if !settings.allows(media_type) {
        return Err(ValidationError::UnsupportedMediaType(media_type.mime().to_string()).into());
    }

    if asset.size() > settings.max_file_size {
        return Err(ValidationError::TooLarge {
            size: asset.size(),
            max: settings.max_file_size,
        }
        .into());
    }

    validate_filename(asset)?;
    Ok(())
}

/// The filename extension must exist and agree with the declared media type.
fn validate_filename(asset: &ImageAsset) -> Result<(), ValidationError> {
    let filename = asset.filename();
    let ext = extension_of(filename)
        .ok_or_else(|| ValidationError::extension(format!("File has no extension: {filename}")))?;

    if !asset.media_type().matches_extension(&ext) {
        return Err(ValidationError::extension(format!(
            "Extension .{ext} does not match {}",
            asset.media_type()
        )));
    }

    Ok(())
}
