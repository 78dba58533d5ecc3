//! rust_qr_decoder - QR Code symbol decoding
//!
//! Turns a sampled QR symbol (a module grid, or a rectified luma image plus
//! its three finder marks) into typed data segments: version and format
//! recovery, unmasking, codeword deinterleaving, Reed-Solomon correction and
//! the mode-indicator bitstream decoder.
//!
//! ```no_run
//! use rust_qr_decoder::{BitMatrix, decode_grid};
//!
//! # fn grid() -> BitMatrix { BitMatrix::square(21) }
//! let segments = decode_grid(&grid()).unwrap();
//! println!("{}", segments.to_text());
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code decoding modules (error correction, header recovery, data modes)
pub mod decoder;
/// Crate error type
pub mod error;
/// Core data structures (BitMatrix, Version, DataSegment, etc.)
pub mod models;
/// Image file loading
pub mod tools;
/// Utility functions (grayscale, grid sampling)
pub mod utils;

pub use decoder::config::DecoderConfig;
pub use decoder::qr_decoder::QrDecoder;
pub use error::{DecodeError, Result};
pub use models::{
    BitArray, BitMatrix, DataMode, DataSegment, DataSegments, ECLevel, FinderMark, FinderMarks,
    MaskPattern, Point, SegmentFlags, SegmentsFlags, Version,
};
pub use utils::sampling::LumaImage;

fn global_decoder() -> QrDecoder {
    QrDecoder::new(*DecoderConfig::global())
}

/// Decode an already sampled symbol grid
///
/// The grid side must be `17 + 4 * version`. Uncorrectable error correction
/// blocks do not fail the decode; they set [`SegmentsFlags::CORRUPTED`].
pub fn decode_grid(grid: &BitMatrix) -> Result<DataSegments> {
    global_decoder().decode_grid(grid)
}

/// Decode a rectified symbol image using its three finder marks
pub fn decode_image(image: &LumaImage, marks: &FinderMarks) -> Result<DataSegments> {
    global_decoder().decode_image(image, marks)
}

/// Decode several grids in parallel, results in input order
pub fn decode_batch(grids: &[BitMatrix]) -> Vec<Result<DataSegments>> {
    global_decoder().decode_batch(grids)
}
