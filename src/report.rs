use crate::constants::{SIZE_UNITS, SIZE_UNIT_BASE};

/// Size comparison for one compression run. Derived from the pair of
/// buffers, never stored apart from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    pub ratio: i64,
}

impl SizeReport {
    pub fn new(original_bytes: u64, compressed_bytes: u64) -> Self {
        Self {
            original_bytes,
            compressed_bytes,
            ratio: compression_ratio(original_bytes, compressed_bytes),
        }
    }

    pub fn original_display(&self) -> String {
        format_size(self.original_bytes)
    }

    pub fn compressed_display(&self) -> String {
        format_size(self.compressed_bytes)
    }
}

/// Percentage reduction in byte size, rounded to the nearest integer.
/// Negative when the re-encode grew the file; 0 for a zero-byte original.
pub fn compression_ratio(original_bytes: u64, compressed_bytes: u64) -> i64 {
    if original_bytes == 0 {
        return 0;
    }

    let reduction = (original_bytes as f64 - compressed_bytes as f64) / original_bytes as f64;
    (reduction * 100.0).round() as i64
}

/// Human-readable byte size: largest unit in {Bytes, KB, MB} with a value
/// of at least 1, rounded to two decimal places with trailing zeros
/// dropped. Sizes past the MB range stay in MB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut scaled = bytes as f64;
    let mut unit_index = 0;
    while scaled >= SIZE_UNIT_BASE && unit_index < SIZE_UNITS.len() - 1 {
        scaled /= SIZE_UNIT_BASE;
        unit_index += 1;
    }
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", trim_decimals(rounded), SIZE_UNITS[unit_index])
}

fn trim_decimals(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
