use crate::constants::{DOWNLOAD_EXTENSION, DOWNLOAD_PREFIX};
use crate::engine::CompressedImage;
use crate::error::{CompressionError, Result};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default name for a saved output: `compressed_<unixTimeMillis>.jpg`.
pub fn suggested_filename() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{}{}.{}", DOWNLOAD_PREFIX, millis, DOWNLOAD_EXTENSION)
}

/// Where the output goes: an explicit file path is used as-is, a directory
/// gets the suggested name dropped into it, and no path at all means the
/// suggested name in the current directory.
pub fn resolve_output_path(output: Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(suggested_filename()),
        Some(path) => path,
        None => PathBuf::from(suggested_filename()),
    }
}

/// Persist the compressed bytes under the given path, creating parent
/// directories as needed.
pub async fn save_compressed(compressed: &CompressedImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|_| CompressionError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    tokio::fs::write(path, compressed.bytes()).await?;
    Ok(())
}
