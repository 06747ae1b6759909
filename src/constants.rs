pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 10;
pub const MAX_QUALITY: u8 = 100;

pub const JPEG_MIME: &str = "image/jpeg";
pub const GENERIC_IMAGE_MIME: &str = "application/octet-stream";

pub const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB"];
pub const SIZE_UNIT_BASE: f64 = 1024.0;

pub const DOWNLOAD_PREFIX: &str = "compressed_";
pub const DOWNLOAD_EXTENSION: &str = "jpg";

// Suggestion bands used by `info` (bytes)
pub const LARGE_FILE_THRESHOLD: u64 = 5 * 1024 * 1024;
pub const MEDIUM_FILE_THRESHOLD: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    WebP,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            "webp" => Some(SourceFormat::WebP),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "jpg",
            SourceFormat::Png => "png",
            SourceFormat::WebP => "webp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "image/jpeg",
            SourceFormat::Png => "image/png",
            SourceFormat::WebP => "image/webp",
        }
    }
}
