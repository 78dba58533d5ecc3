//! Error types shared by every decoding stage.

use thiserror::Error;

use crate::decoder::reed_solomon::RsError;

/// Errors surfaced by the decoder.
///
/// Uncorrectable Reed-Solomon blocks are not errors at the symbol level: they
/// are recorded in [`crate::models::SegmentsFlags::CORRUPTED`] and decoding
/// continues. Only malformed input and unreadable headers abort a decode.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Bit index outside `0..len`
    #[error("bit index {index} out of range for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the indexed sequence
        len: usize,
    },

    /// Two grids that must share a size do not
    #[error("matrix dimensions mismatch: {left_w}x{left_h} vs {right_w}x{right_h}")]
    DimensionMismatch {
        /// Width of the receiving grid
        left_w: usize,
        /// Height of the receiving grid
        left_h: usize,
        /// Width of the other operand
        right_w: usize,
        /// Height of the other operand
        right_h: usize,
    },

    /// Grid side is not `17 + 4v` for a version in 1..=40
    #[error("invalid symbol size {width}x{height}")]
    InvalidSize {
        /// Width in modules or pixels
        width: usize,
        /// Height in modules or pixels
        height: usize,
    },

    /// Flow direction pair whose directions are equal or opposite
    #[error("invalid flow direction 0x{0:02x}")]
    InvalidFlow(u8),

    /// Version blocks unreadable or version number out of range
    #[error("version information could not be decoded")]
    InvalidVersion,

    /// Both format copies exceed the correction bound
    #[error("format information could not be decoded")]
    InvalidFormat,

    /// Version blocks decode to a version the grid size does not match
    #[error("version block says {decoded}, grid size implies {expected}")]
    VersionMismatch {
        /// Version read from the version blocks
        decoded: u8,
        /// Version implied by the grid side
        expected: u8,
    },

    /// Fewer sampled bits than the block layout needs
    #[error("codeword stream truncated: need {needed} bits, have {available}")]
    TruncatedCodewords {
        /// Bits the block layout needs
        needed: usize,
        /// Bits actually sampled
        available: usize,
    },

    /// Reed-Solomon input rejected
    #[error("reed-solomon: {0}")]
    ReedSolomon(#[from] RsError),

    /// Image file could not be read
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DecodeError>;
