use crate::acquire;
use crate::constants::{LARGE_FILE_THRESHOLD, MEDIUM_FILE_THRESHOLD};
use crate::engine::decode_source;
use crate::error::Result;
use crate::report::format_size;
use crate::{info, verbose};
use std::path::Path;

pub async fn show_image_info(input_path: &Path) -> Result<()> {
    info!("📋 Analyzing image: {:?}", input_path);

    let source = acquire::read_source(input_path).await?;
    let img = decode_source(source.bytes())?;

    info!("  📏 Dimensions: {}x{} pixels", img.width(), img.height());
    info!(
        "  📦 File size: {} ({} bytes)",
        format_size(source.byte_len()),
        source.byte_len()
    );
    info!("  🎭 Declared type: {}", source.mime_type());
    verbose!("Color type: {:?}", img.color());

    info!("\n💡 {}", quality_suggestion(source.byte_len()));

    Ok(())
}

/// Size-banded starting point for the quality slider.
pub fn quality_suggestion(byte_len: u64) -> &'static str {
    if byte_len > LARGE_FILE_THRESHOLD {
        "Large file (>5MB): try quality 60-80"
    } else if byte_len > MEDIUM_FILE_THRESHOLD {
        "Medium file (1-5MB): try quality 70-85"
    } else {
        "Small file (<1MB): try quality 85-95"
    }
}
