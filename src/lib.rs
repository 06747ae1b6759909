pub mod acquire;
pub mod cli;
pub mod constants;
pub mod engine;
pub mod error;
pub mod info;
pub mod logger;
pub mod persist;
pub mod report;
pub mod session;

pub use acquire::{declared_mime_type, read_source};
pub use engine::{
    compress, decode_source, encode_jpeg, CompressOptions, CompressedImage, SourceImage,
};
pub use error::{CompressionError, Result};
pub use info::show_image_info;
pub use persist::{resolve_output_path, save_compressed, suggested_filename};
pub use report::{compression_ratio, format_size, SizeReport};
pub use session::{CompressOutcome, CompressSession, CompressTicket, SessionState};
