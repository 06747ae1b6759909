#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, RgbImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Photo-like deterministic noise. PNG stores this poorly and JPEG
/// quantizes it well, so re-encoding reliably shrinks it.
pub fn noise_image(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut state = seed | 1;
    RgbImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let b = state.to_le_bytes();
        image::Rgb([b[0], b[1], b[2]])
    })
}

pub fn write_png(img: &RgbImage, path: &Path) {
    DynamicImage::ImageRgb8(img.clone())
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

pub fn create_noise_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    write_png(&noise_image(width, height, 0x9e37_79b9), &path);
    path
}

pub fn create_solid_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    write_png(&RgbImage::from_pixel(width, height, image::Rgb([80, 140, 200])), &path);
    path
}

pub fn create_garbage_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path
}
