//! Local image encoding for vision requests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use grok_core::ImageSource;
use grok_error::{GrokError, GrokErrorKind, GrokResult};
use std::path::Path;
use tracing::{debug, instrument};

/// File extensions accepted for local images.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Returns the MIME subtype for a local image path.
///
/// Only the extension is inspected; the file is not touched.
///
/// # Examples
///
/// ```
/// use grok_client::image_subtype;
/// use std::path::Path;
///
/// assert_eq!(image_subtype(Path::new("photo.JPG")).unwrap(), "jpeg");
/// assert!(image_subtype(Path::new("scan.bmp")).is_err());
/// ```
#[track_caller]
pub fn image_subtype(path: &Path) -> GrokResult<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok("jpeg"),
        "png" => Ok("png"),
        _ => Err(GrokError::invalid_argument(format!(
            "Unsupported image type '{}' for {}. Supported types: {}",
            extension,
            path.display(),
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        ))),
    }
}

/// Reads a local image and returns it as an inline base64 source.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn encode_local_image(path: &Path) -> GrokResult<ImageSource> {
    let mime_subtype = image_subtype(path)?;

    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            GrokError::invalid_argument(format!("Image file not found: {}", path.display()))
        }
        _ => GrokError::new(GrokErrorKind::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    })?;

    debug!(bytes = bytes.len(), mime_subtype, "Encoded local image");

    Ok(ImageSource::Inline {
        mime_subtype: mime_subtype.to_string(),
        data: STANDARD.encode(&bytes),
    })
}
