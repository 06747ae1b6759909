use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Encoder produced no output")]
    EmptyOutput,

    #[error("Invalid quality value: {0}. Must be between 10 and 100")]
    InvalidQuality(u8),

    #[error("No source image loaded")]
    NoSource,

    #[error("A compression is already in flight")]
    CompressionInFlight,

    #[error("Background task failed: {0}")]
    TaskJoin(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
