//! Pixel surfaces: decoding into one, allocating a blank one, and copying
//! pixels between them.

use std::io::Cursor;
use image::metadata::Orientation;
use image::{DynamicImage, GenericImageView, ImageDecoder, ImageReader, RgbImage, RgbaImage, imageops};
use crate::utils::{MediaType, ScrubError, ScrubResult};

/// Decodes `bytes` as `media_type`, refusing to guess any other format.
///
/// The EXIF orientation is applied to the pixels, so the returned image is
/// upright and its dimensions are the ones the photo is displayed at. The
/// tag itself does not survive re-encoding.
pub fn decode(bytes: &[u8], media_type: MediaType) -> ScrubResult<DynamicImage> {
    let invalid = |e: image::ImageError| ScrubError::decode(format!("Not a valid {media_type} image: {e}"));

    let mut decoder = ImageReader::with_format(Cursor::new(bytes), media_type.image_format())
        .into_decoder()
        .map_err(invalid)?;
    // A malformed EXIF block is not worth rejecting the photo over.
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);

    let mut image = DynamicImage::from_decoder(decoder).map_err(invalid)?;
    image.apply_orientation(orientation);

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ScrubError::decode(format!(
            "Image has no pixels ({width}×{height})"
        )));
    }

    Ok(image)
}

/// 8-bit drawing surface. JPEG output gets RGB since it cannot carry alpha;
/// GIF transparency is kept as RGBA and quantized by the encoder.
pub enum Surface {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Surface {
    /// Allocates a blank surface suited to `media_type`.
    pub fn blank(media_type: MediaType, width: u32, height: u32) -> Self {
        if media_type.has_alpha() {
            Self::Rgba(RgbaImage::new(width, height))
        } else {
            Self::Rgb(RgbImage::new(width, height))
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Rgb(buf) => buf.dimensions(),
            Self::Rgba(buf) => buf.dimensions(),
        }
    }

    /// Copies every pixel of `source` onto the surface at the origin.
    ///
    /// No scaling or cropping: pixels beyond the surface bounds are clipped,
    /// which never happens when the surface was sized from `source`.
    pub fn draw(&mut self, source: &DynamicImage) {
        match self {
            Self::Rgb(canvas) => match source.as_rgb8() {
                Some(pixels) => imageops::replace(canvas, pixels, 0, 0),
                None => imageops::replace(canvas, &source.to_rgb8(), 0, 0),
            },
            Self::Rgba(canvas) => match source.as_rgba8() {
                Some(pixels) => imageops::replace(canvas, pixels, 0, 0),
                None => imageops::replace(canvas, &source.to_rgba8(), 0, 0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn blank_surface_layout_follows_media_type() {
        assert!(matches!(Surface::blank(MediaType::Jpeg, 2, 3), Surface::Rgb(_)));
        assert!(matches!(Surface::blank(MediaType::Png, 2, 3), Surface::Rgba(_)));
        assert!(matches!(Surface::blank(MediaType::Gif, 2, 3), Surface::Rgba(_)));
        assert_eq!(Surface::blank(MediaType::Png, 2, 3).dimensions(), (2, 3));
    }

    #[test]
    fn draw_copies_pixels_exactly() {
        let mut source = RgbaImage::new(3, 2);
        source.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        source.put_pixel(2, 1, Rgba([200, 100, 50, 128]));
        let source = DynamicImage::ImageRgba8(source);

        let mut surface = Surface::blank(MediaType::Png, 3, 2);
        surface.draw(&source);

        let Surface::Rgba(canvas) = surface else { panic!("expected rgba surface") };
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(canvas.get_pixel(2, 1), &Rgba([200, 100, 50, 128]));
        assert_eq!(canvas.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn draw_converts_to_surface_layout() {
        let mut source = RgbaImage::new(1, 1);
        source.put_pixel(0, 0, Rgba([1, 2, 3, 255]));

        let mut surface = Surface::blank(MediaType::Jpeg, 1, 1);
        surface.draw(&DynamicImage::ImageRgba8(source));

        let Surface::Rgb(canvas) = surface else { panic!("expected rgb surface") };
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([1, 2, 3]));
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode(b"definitely not a png", MediaType::Png).unwrap_err();
        assert!(matches!(err, ScrubError::Decode(_)));
    }
}
