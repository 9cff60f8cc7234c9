//! Serializes a pixel surface into the declared media type.
//!
//! None of the encoders are handed EXIF, XMP or ICC data, so the output only
//! carries what each format needs to describe its pixels.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::gif::GifEncoder;
use image::{ExtendedColorType, ImageEncoder};
use crate::utils::{MediaType, ScrubError, ScrubResult};
use super::surface::Surface;

type Result<T> = ScrubResult<T>;

/// Encodes an RGB surface as baseline JPEG at `quality`.
pub fn encode_jpeg(surface: &Surface, quality: u8) -> Result<Vec<u8>> {
    let Surface::Rgb(canvas) = surface else {
        return Err(ScrubError::encode("JPEG requires an RGB surface"));
    };

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ExtendedColorType::Rgb8)
        .map_err(|e| ScrubError::encode(format!("JPEG encode failed: {e}")))?;
    Ok(out)
}

/// Encodes an RGBA surface as PNG with adaptive filtering.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let Surface::Rgba(canvas) = surface else {
        return Err(ScrubError::encode("PNG requires an RGBA surface"));
    };

    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::Adaptive)
        .write_image(canvas.as_raw(), canvas.width(), canvas.height(), ExtendedColorType::Rgba8)
        .map_err(|e| ScrubError::encode(format!("PNG encode failed: {e}")))?;
    Ok(out)
}

/// Encodes an RGBA surface as a single-frame GIF.
///
/// The encoder quantizes to a 256-colour palette; fully transparent pixels
/// stay transparent.
pub fn encode_gif(surface: &Surface) -> Result<Vec<u8>> {
    let Surface::Rgba(canvas) = surface else {
        return Err(ScrubError::encode("GIF requires an RGBA surface"));
    };

    let mut out = Vec::new();
    {
        // The trailer is written when the encoder is dropped.
        let mut encoder = GifEncoder::new(&mut out);
        encoder
            .encode(canvas.as_raw(), canvas.width(), canvas.height(), ExtendedColorType::Rgba8)
            .map_err(|e| ScrubError::encode(format!("GIF encode failed: {e}")))?;
    }
    Ok(out)
}

/// Dispatches to the encoder for `media_type`.
pub fn encode_surface(surface: &Surface, media_type: MediaType, jpeg_quality: u8) -> Result<Vec<u8>> {
    let bytes = match media_type {
        MediaType::Jpeg => encode_jpeg(surface, jpeg_quality)?,
        MediaType::Png => encode_png(surface)?,
        MediaType::Gif => encode_gif(surface)?,
    };

    if bytes.is_empty() {
        return Err(ScrubError::encode(format!("{media_type} encoder produced no data")));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_format_emits_its_signature() {
        let jpeg = encode_surface(&Surface::blank(MediaType::Jpeg, 4, 4), MediaType::Jpeg, 90).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let png = encode_surface(&Surface::blank(MediaType::Png, 4, 4), MediaType::Png, 90).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let gif = encode_surface(&Surface::blank(MediaType::Gif, 4, 4), MediaType::Gif, 90).unwrap();
        assert_eq!(&gif[..6], b"GIF89a");
        assert_eq!(gif.last(), Some(&0x3B));
    }

    #[test]
    fn surface_layout_mismatch_is_an_encode_error() {
        let err = encode_surface(&Surface::blank(MediaType::Png, 2, 2), MediaType::Jpeg, 90).unwrap_err();
        assert!(matches!(err, ScrubError::Encode(_)));
    }
}
