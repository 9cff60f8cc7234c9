//! The re-encode transform: decode, redraw onto a blank surface, encode.
//!
//! Both codec steps run on tokio's blocking pool, so a call suspends exactly
//! twice. Each call owns its surfaces; nothing is shared between calls.

use image::GenericImageView;
use tracing::debug;

use crate::core::{ImageAsset, ScrubReport, ScrubSettings};
use crate::utils::{ScrubError, ScrubResult};

use super::encoders::encode_surface;
use super::surface::{Surface, decode};

/// Re-encodes `asset`, dropping everything but its pixels.
///
/// The caller validates the asset first (see [`crate::utils::validate_asset`]).
/// Fails with [`ScrubError::Decode`] when the bytes are not an image of the
/// declared type and [`ScrubError::Encode`] when the pixels cannot be written
/// back in that type.
pub async fn reencode(asset: &ImageAsset, settings: &ScrubSettings) -> ScrubResult<ImageAsset> {
    reencode_with_report(asset, settings).await.map(|(scrubbed, _)| scrubbed)
}

/// Same as [`reencode`], also returning size and dimension statistics.
pub async fn reencode_with_report(
    asset: &ImageAsset,
    settings: &ScrubSettings,
) -> ScrubResult<(ImageAsset, ScrubReport)> {
    let media_type = asset.media_type();
    let jpeg_quality = settings.jpeg_quality;
    let bytes = asset.shared_bytes();

    let decoded = run_blocking(move || decode(&bytes, media_type)).await?;
    let (width, height) = decoded.dimensions();
    debug!("Decoded '{}': {}×{} {}", asset.filename(), width, height, media_type);

    let encoded = run_blocking(move || {
        let mut surface = Surface::blank(media_type, width, height);
        surface.draw(&decoded);
        drop(decoded);
        encode_surface(&surface, media_type, jpeg_quality)
    })
    .await?;

    let scrubbed = ImageAsset::new(asset.filename(), media_type, encoded);
    let report = ScrubReport::new(
        asset.filename(),
        media_type,
        (width, height),
        asset.size(),
        scrubbed.size(),
    );

    debug!(
        "'{}' re-encoded: {} → {} bytes ({:.1}% saved)",
        report.filename, report.original_size, report.scrubbed_size, report.compression_ratio
    );

    Ok((scrubbed, report))
}

async fn run_blocking<T, F>(work: F) -> ScrubResult<T>
where
    F: FnOnce() -> ScrubResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ScrubError::processing(format!("Task panicked: {e}")))?
}
