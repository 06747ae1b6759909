use crate::constants::{SourceFormat, GENERIC_IMAGE_MIME};
use crate::engine::SourceImage;
use crate::error::{CompressionError, Result};
use std::path::Path;

/// MIME type declared for a chosen file, from its extension. Unknown
/// extensions still load with a generic type; the decode step is the real
/// format check.
pub fn declared_mime_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(SourceFormat::from_extension)
        .map(|format| format.mime_type())
        .unwrap_or(GENERIC_IMAGE_MIME)
}

/// Read the chosen file into a [`SourceImage`]. The read suspends until
/// the bytes are available; no format validation happens here.
pub async fn read_source(path: &Path) -> Result<SourceImage> {
    if !path.exists() {
        return Err(CompressionError::FileNotFound(path.to_path_buf()));
    }

    let bytes = tokio::fs::read(path).await?;
    Ok(SourceImage::new(bytes, declared_mime_type(path)))
}
