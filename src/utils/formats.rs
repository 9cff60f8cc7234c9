use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::utils::{ScrubError, ValidationError};

/// Media types accepted for photo uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "image/jpeg", alias = "image/jpg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [Self::Jpeg, Self::Png, Self::Gif];

    /// MIME string sent as the multipart content type
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }

    /// Get file extensions associated with this media type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
            Self::Gif => &["gif"],
        }
    }

    /// Check if the extension matches this media type
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Get the primary extension for this media type
    pub fn primary_extension(&self) -> &'static str {
        self.extensions()[0]
    }

    /// Codec format handed to the `image` crate
    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
            Self::Gif => image::ImageFormat::Gif,
        }
    }

    /// JPEG has no alpha channel; everything else keeps it.
    pub fn has_alpha(&self) -> bool {
        !matches!(self, Self::Jpeg)
    }

    pub fn from_extension(ext: &str) -> Result<Self, ScrubError> {
        let ext = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|media_type| media_type.matches_extension(&ext))
            .ok_or_else(|| ValidationError::UnsupportedMediaType(format!(".{ext}")).into())
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

impl FromStr for MediaType {
    type Err = ScrubError;

    fn from_str(mime: &str) -> Result<Self, Self::Err> {
        let mime = mime.trim().to_lowercase();
        match mime.as_str() {
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            "image/gif" => Ok(Self::Gif),
            _ => Err(ValidationError::UnsupportedMediaType(mime).into()),
        }
    }
}

/// Get the lowercase extension of a filename
pub fn extension_of(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Get media type from file extension
pub fn media_type_from_filename(filename: &str) -> Result<MediaType, ScrubError> {
    let ext = extension_of(filename).ok_or_else(|| {
        ScrubError::from(ValidationError::extension(format!("File has no extension: {filename}")))
    })?;

    MediaType::from_extension(&ext)
}
