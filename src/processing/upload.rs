//! Multipart upload parts built from scrubbed photos.
//!
//! Nothing here touches the network: the calling form attaches the part to
//! its own request.

use std::sync::Arc;
use serde::Serialize;
use tracing::info;

use crate::core::{ImageAsset, ScrubReport, ScrubSettings};
use crate::utils::{ScrubResult, validate_asset};

use super::reencode::reencode_with_report;

/// Form field a photo is uploaded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadField {
    /// Gallery and product photos
    Photo,
    /// Photo attached to a customer review
    Review,
}

impl UploadField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Photo => "uploaded_file",
            Self::Review => "review_photo",
        }
    }
}

/// One file part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub field_name: &'static str,
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Arc<[u8]>,
}

impl UploadPart {
    pub fn from_asset(field: UploadField, asset: &ImageAsset) -> Self {
        Self {
            field_name: field.name(),
            filename: asset.filename().to_string(),
            content_type: asset.media_type().mime(),
            bytes: asset.shared_bytes(),
        }
    }

    /// `Content-Disposition` header value for this part.
    pub fn content_disposition(&self) -> String {
        let filename = self
            .filename
            .replace('\\', "\\\\")
            .replace('"', "%22")
            .replace(['\r', '\n'], " ");
        format!("form-data; name=\"{}\"; filename=\"{}\"", self.field_name, filename)
    }
}

/// A part ready for submission, with the statistics of its re-encode.
#[derive(Debug, Clone)]
pub struct PreparedUpload {
    pub part: UploadPart,
    pub report: ScrubReport,
}

/// Validates `asset`, strips its metadata and wraps the result for upload.
pub async fn prepare_upload(
    asset: &ImageAsset,
    field: UploadField,
    settings: &ScrubSettings,
) -> ScrubResult<PreparedUpload> {
    validate_asset(asset, settings)?;
    let (scrubbed, report) = reencode_with_report(asset, settings).await?;

    info!(
        "Prepared '{}' for {} ({} bytes)",
        report.filename,
        field.name(),
        report.scrubbed_size
    );

    Ok(PreparedUpload {
        part: UploadPart::from_asset(field, &scrubbed),
        report,
    })
}
