//! Image asset definition and creation.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use crate::utils::{MediaType, PathError, ScrubResult, ValidationError, media_type_from_filename};

/// A photo as picked by the user: filename, declared media type and bytes.
///
/// The byte buffer is immutable and cheaply shareable with blocking workers.
/// A re-encoded asset always owns a freshly allocated buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    filename: String,
    media_type: MediaType,
    bytes: Arc<[u8]>,
}

impl ImageAsset {
    pub fn new(filename: impl Into<String>, media_type: MediaType, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            filename: filename.into(),
            media_type,
            bytes: bytes.into(),
        }
    }

    /// Builds an asset from a file-picker style triple; the MIME string must be allowed.
    pub fn from_parts(filename: impl Into<String>, mime: &str, bytes: Vec<u8>) -> ScrubResult<Self> {
        let media_type = mime.parse::<MediaType>()?;
        Ok(Self::new(filename, media_type, bytes))
    }

    /// Reads a photo from disk, deriving the media type from its extension.
    pub async fn open(path: impl AsRef<Path>) -> ScrubResult<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ValidationError::path_not_found(path),
            _ => ValidationError::Path(PathError::from(e)),
        })?;

        if !metadata.is_file() {
            return Err(ValidationError::not_a_file(path).into());
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ValidationError::not_a_file(path))?
            .to_string();
        let media_type = media_type_from_filename(&filename)?;
        let bytes = fs::read(path).await.map_err(PathError::from)?;

        Ok(Self::new(filename, media_type, bytes))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the byte buffer, for moving into a blocking task.
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("filename", &self.filename)
            .field("media_type", &self.media_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}
