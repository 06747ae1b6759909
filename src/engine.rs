use crate::constants::{DEFAULT_QUALITY, JPEG_MIME, MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::sync::Arc;

/// Raw bytes of the chosen file plus the MIME type declared at acquisition
/// time. Immutable once loaded; replaced wholesale when a new file is chosen.
#[derive(Debug, Clone)]
pub struct SourceImage {
    bytes: Arc<[u8]>,
    mime_type: String,
}

impl SourceImage {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// JPEG output of one compression run. Only valid for the source it was
/// produced from; the session clears it when a new source is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    bytes: Vec<u8>,
}

impl CompressedImage {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        JPEG_MIME
    }

    pub fn byte_len(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompressOptions {
    pub quality: u8,
}

impl CompressOptions {
    pub fn new(quality: Option<u8>) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self { quality })
    }
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Decode source bytes into a pixel buffer at the image's intrinsic
/// dimensions. The container format is guessed from the bytes themselves,
/// not from the declared MIME type.
pub fn decode_source(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    reader.decode().map_err(CompressionError::Decode)
}

/// Re-encode a pixel buffer as JPEG at the given quality (10-100).
///
/// The buffer is flattened to RGB first since JPEG carries no alpha.
/// Deterministic: no timestamps or randomness end up in the stream.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    debug_assert!(
        (MIN_QUALITY..=MAX_QUALITY).contains(&quality),
        "quality must be validated before reaching the encoder"
    );

    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(CompressionError::Encode)?;

    if buf.is_empty() {
        return Err(CompressionError::EmptyOutput);
    }

    Ok(buf)
}

/// Full engine contract: decode the source, re-encode as JPEG at the
/// requested quality. No resizing, no cropping; the source is not mutated.
pub fn compress(source: &SourceImage, options: &CompressOptions) -> Result<CompressedImage> {
    let img = decode_source(source.bytes())?;
    let bytes = encode_jpeg(&img, options.quality)?;
    Ok(CompressedImage { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img.clone())
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn noise_image(width: u32, height: u32) -> RgbImage {
        // Deterministic xorshift so fixtures are reproducible
        let mut state = 0x2545_f491u32;
        RgbImage::from_fn(width, height, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let b = state.to_le_bytes();
            image::Rgb([b[0], b[1], b[2]])
        })
    }

    #[test]
    fn test_compress_options_default_quality() {
        let options = CompressOptions::new(None).unwrap();
        assert_eq!(options.quality, 80);
    }

    #[test]
    fn test_compress_options_bounds() {
        assert!(CompressOptions::new(Some(10)).is_ok());
        assert!(CompressOptions::new(Some(100)).is_ok());

        let result = CompressOptions::new(Some(0));
        assert!(matches!(result, Err(CompressionError::InvalidQuality(0))));

        let result = CompressOptions::new(Some(9));
        assert!(matches!(result, Err(CompressionError::InvalidQuality(9))));

        let result = CompressOptions::new(Some(101));
        assert!(matches!(result, Err(CompressionError::InvalidQuality(101))));
    }

    #[test]
    fn test_decode_source_garbage() {
        let result = decode_source(b"definitely not an image");
        assert!(matches!(result, Err(CompressionError::Decode(_))));
    }

    #[test]
    fn test_decode_source_empty() {
        assert!(decode_source(&[]).is_err());
    }

    #[test]
    fn test_decode_source_truncated_png() {
        let full = png_bytes(&noise_image(16, 16));
        let result = decode_source(&full[..full.len() / 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_compress_preserves_dimensions() {
        let source = SourceImage::new(png_bytes(&noise_image(31, 17)), "image/png");
        let options = CompressOptions::new(Some(80)).unwrap();

        let compressed = compress(&source, &options).unwrap();
        let round_tripped = decode_source(compressed.bytes()).unwrap();
        assert_eq!(round_tripped.width(), 31);
        assert_eq!(round_tripped.height(), 17);
    }

    #[test]
    fn test_compress_is_deterministic() {
        let source = SourceImage::new(png_bytes(&noise_image(64, 48)), "image/png");
        let options = CompressOptions::new(Some(75)).unwrap();

        let first = compress(&source, &options).unwrap();
        let second = compress(&source, &options).unwrap();
        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn test_compress_does_not_mutate_source() {
        let original_bytes = png_bytes(&noise_image(32, 32));
        let source = SourceImage::new(original_bytes.clone(), "image/png");
        let options = CompressOptions::default();

        compress(&source, &options).unwrap();
        assert_eq!(source.bytes(), original_bytes.as_slice());
    }

    #[test]
    fn test_compress_output_is_jpeg() {
        let source = SourceImage::new(png_bytes(&noise_image(24, 24)), "image/png");
        let compressed = compress(&source, &CompressOptions::default()).unwrap();

        assert_eq!(compressed.mime_type(), "image/jpeg");
        // JPEG SOI marker
        assert_eq!(&compressed.bytes()[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_compress_solid_color_round_trip() {
        let solid = RgbImage::from_pixel(40, 30, image::Rgb([120, 60, 200]));
        let source = SourceImage::new(png_bytes(&solid), "image/png");

        let compressed = compress(&source, &CompressOptions::default()).unwrap();
        let decoded = decode_source(compressed.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }

    #[test]
    fn test_compress_rgba_source() {
        let rgba = image::RgbaImage::from_pixel(8, 8, image::Rgba([255, 0, 0, 128]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();

        let source = SourceImage::new(buf.into_inner(), "image/png");
        assert!(compress(&source, &CompressOptions::default()).is_ok());
    }

    #[test]
    fn test_quality_size_ordering_on_noise() {
        let source = SourceImage::new(png_bytes(&noise_image(128, 128)), "image/png");

        let low = compress(&source, &CompressOptions { quality: 20 }).unwrap();
        let high = compress(&source, &CompressOptions { quality: 90 }).unwrap();
        assert!(low.byte_len() <= high.byte_len());
    }
}
