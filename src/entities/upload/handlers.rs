use crate::core::error::ApiResult;
use crate::core::extractors::UploadedFile;
use crate::core::validation::extractor::rejection_error;
use axum::Json;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartRejection;
use serde::{Deserialize, Serialize};

/// Multipart part carrying the image
pub const IMAGE_FIELD: &str = "image";

/// What is reported back about an uploaded image
///
/// Name and format are the client's declarations; the content is not inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub filename: Option<String>,
    pub format: Option<String>,
    pub size_bytes: usize,
    /// Size in KiB rounded to two decimals
    pub size_kb: f64,
}

impl From<&UploadedFile> for ImageSummary {
    fn from(file: &UploadedFile) -> Self {
        let size_bytes = file.len();
        Self {
            filename: file.filename.clone(),
            format: file.content_type.clone(),
            size_bytes,
            size_kb: (size_bytes as f64 / 1024.0 * 100.0).round() / 100.0,
        }
    }
}

/// `POST /post-image`
pub async fn post_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<ImageSummary>> {
    let mut multipart = multipart.map_err(|e| rejection_error(e.status(), e.body_text()))?;
    let image = UploadedFile::from_multipart(&mut multipart, IMAGE_FIELD).await?;
    let summary = ImageSummary::from(&image);
    tracing::debug!(
        filename = ?summary.filename,
        size_bytes = summary.size_bytes,
        "image received"
    );
    Ok(Json(summary))
}
