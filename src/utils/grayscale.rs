//! Convert RGB/RGBA pixels to 8-bit luma
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8

use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

#[inline]
fn luma(px: &[u8]) -> u8 {
    let lum = (COEF_R * px[0] as u32 + COEF_G * px[1] as u32 + COEF_B * px[2] as u32) >> 8;
    lum.min(255) as u8
}

fn to_grayscale(pixels: &[u8], channels: usize, width: usize, height: usize) -> Vec<u8> {
    pixels
        .chunks_exact(channels)
        .take(width * height)
        .map(luma)
        .collect()
}

fn to_grayscale_parallel(pixels: &[u8], channels: usize, width: usize, height: usize) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }
    // Process rows in parallel
    gray.par_chunks_mut(width)
        .zip(pixels.par_chunks(width * channels))
        .for_each(|(row, src)| {
            for (out, px) in row.iter_mut().zip(src.chunks_exact(channels)) {
                *out = luma(px);
            }
        });
    gray
}

/// Convert RGB image to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    to_grayscale(rgb, 3, width, height)
}

/// Convert RGBA image to grayscale (ignores alpha channel)
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    to_grayscale(rgba, 4, width, height)
}

/// Convert RGB to grayscale, one row per rayon task
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    to_grayscale_parallel(rgb, 3, width, height)
}

/// Convert RGBA to grayscale, one row per rayon task
pub fn rgba_to_grayscale_parallel(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    to_grayscale_parallel(rgba, 4, width, height)
}
