//! Shared fixtures: module grids of known symbols and rendering helpers
#![allow(dead_code)]

use image::{GrayImage, Luma};
use rust_qr_decoder::{BitMatrix, FinderMark, FinderMarks, Point};

/// Version 1-M, mask 7, numeric "4376471154038"
pub const GOLDEN_V1_M: &[&str] = &[
    "111111100000101111111",
    "100000100100001000001",
    "101110100011001011101",
    "101110100010001011101",
    "101110100111101011101",
    "100000101010001000001",
    "111111101010101111111",
    "000000000100000000000",
    "100101101111110100000",
    "111010011001010101100",
    "100101111011001110001",
    "001010010000111110000",
    "001000110101011101100",
    "000000001010011110110",
    "111111100011101011110",
    "100000101000001100001",
    "101110100110111001011",
    "101110101010011110011",
    "101110100111011101001",
    "100000100111100110010",
    "111111101110010111000",
];

/// Version 1-M, mask 2, byte "Hello, world"
pub const HELLO_V1_M: &[&str] = &[
    "111111100100001111111",
    "100000100000001000001",
    "101110101011101011101",
    "101110101010001011101",
    "101110101001101011101",
    "100000101100101000001",
    "111111101010101111111",
    "000000001011100000000",
    "101111100100101111100",
    "100011010110110011101",
    "001000111111011001110",
    "000110000100010101100",
    "011001100111001100001",
    "000000001010111111000",
    "111111100010111100110",
    "100000101000110101100",
    "101110101111111010011",
    "101110101100000111000",
    "101110101011101100100",
    "100000100100110011100",
    "111111101101001010010",
];

/// Version 3-M, mask 4: structured append, ECI, byte, numeric, alphanumeric, Kanji, FNC1
pub const MIXED_V3_M: &[&str] = &[
    "11111110111011101101001111111",
    "10000010001011110011101000001",
    "10111010010110100101001011101",
    "10111010111000000101101011101",
    "10111010100100000010001011101",
    "10000010110100001110001000001",
    "11111110101010101010101111111",
    "00000000110111011100000000000",
    "10001011111111000101111111001",
    "01011101001111101110100010100",
    "10011011101100001110100100111",
    "00001101001010100001111111011",
    "00011010101011111101110001010",
    "00011001100100000100010011001",
    "11010111100001110011001100010",
    "10001101101011011001110101101",
    "10000111110001000110110111100",
    "10111001000011101111001011111",
    "00010111001010001001110011101",
    "00000101101010100000010010110",
    "11110110001101111110111111001",
    "00000000100100000010100011010",
    "11111110101011110111101011001",
    "10000010011011011110100011010",
    "10111010111011000011111111000",
    "10111010000011101011110000010",
    "10111010001011101110010000011",
    "10000010010001100100110101000",
    "11111110100101010011110101000",
];

/// Version 7-Q, mask 5, byte pangram over two block groups
pub const FOX_V7_Q: &[&str] = &[
    "111111101000110101011101000101100000101111111",
    "100000101101000001100010000110001001001000001",
    "101110100011000001011111100101010101001011101",
    "101110100110111000111110111011101001101011101",
    "101110100000000100111111100001110011101011101",
    "100000100000011100001000110011000100001000001",
    "111111101010101010101010101010101010101111111",
    "000000000010111111101000110010100000100000000",
    "010000111000010001001111100001111000010000011",
    "101010000101010100011000111011100011101111100",
    "011101101001001110011011001101011000101001010",
    "111101010100011000001111111011111110010100101",
    "000010100110100110010101010011011101010111001",
    "001100010011101010100101011000110110110101001",
    "011100101000010101011101000101010100101100010",
    "000111011101010011010111001000100110001011010",
    "010101110011011011001001110001110001000010110",
    "010110011110000110000000000010100101110010110",
    "110101100001110010101000001110100100100000101",
    "101111010001000011100010011001001000100110111",
    "000111111110010111111111101010010101111111110",
    "111010001100101010011000110001011110100011101",
    "110010101000111110111010100010110110101010111",
    "110010001001100000111000100100101100100011101",
    "011011111010110111001111100111101010111111000",
    "000101010111001010111010110101111000100001010",
    "101100101101011000010100010100000110100100000",
    "100001000011001101101011001100101010010010111",
    "100111101111011010110001000100111011100110000",
    "101011000100101000010011010001101001010001101",
    "001100101110000100101110010100000000011100101",
    "000110011100010100011000011010010111110001111",
    "111011110100110100111101011100000110011111011",
    "011111000111101001100101010111111100100111010",
    "000010101000000001001000001111000100111100010",
    "011110001110011100101011101011111001000000111",
    "100110110010000010001111101110011011111111000",
    "000000001100001110111000100110100000100010111",
    "111111101010101001001010100101010000101011110",
    "100000100001111010111000101101000001100010110",
    "101110100010110000011111100000010000111111111",
    "101110100111011101001001001011000101000011011",
    "101110100011100110011110011111111100111011011",
    "100000101001001111111011100100111011010001000",
    "111111100011010000111001101101110111011110110",
];

pub const FOX_TEXT: &str = "The quick brown fox jumps over the lazy dog. 0123456789";

/// Parse a fixture into a grid
pub fn grid(rows: &[&str]) -> BitMatrix {
    BitMatrix::from_rows(rows).unwrap()
}

/// Toggle each `(x, y)` module
pub fn flip(grid: &mut BitMatrix, modules: &[(usize, usize)]) {
    for &(x, y) in modules {
        grid.toggle(x, y);
    }
}

/// Render modules at `scale` pixels each, dark = 0, light = 255, no quiet zone
pub fn render(grid: &BitMatrix, scale: u32) -> GrayImage {
    GrayImage::from_fn(
        grid.width() as u32 * scale,
        grid.height() as u32 * scale,
        |x, y| {
            let dark = grid.get((x / scale) as usize, (y / scale) as usize);
            Luma([if dark { 0 } else { 255 }])
        },
    )
}

/// Finder marks of a rendered symbol of side `size` modules
pub fn marks(size: usize, scale: u32) -> FinderMarks {
    let scale = scale as f32;
    let near = 3.5 * scale;
    let far = (size as f32 - 3.5) * scale;
    let width = 7.0 * scale;
    FinderMarks::new(
        FinderMark::new(Point::new(near, far), width),
        FinderMark::new(Point::new(near, near), width),
        FinderMark::new(Point::new(far, near), width),
    )
}
