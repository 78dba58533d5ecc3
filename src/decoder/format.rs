//! Format information: error correction level and data mask
//!
//! The 15-bit format string (5 data bits, 10 BCH bits, XOR 0x5412) appears
//! twice in every symbol. Copy 1 wraps around the top-left finder; copy 2 is
//! split between the top-right and bottom-left finders and is only read when
//! copy 1 cannot be corrected.

use log::{debug, warn};

use crate::decoder::bch::LookupTable;
use crate::decoder::sampler::{FlowDirection, GridSampler};
use crate::error::{DecodeError, Result};
use crate::models::{BitArray, BitMatrix, ECLevel, MaskPattern, Rect};

/// Width of the encoded format string
pub const FORMAT_BITS: usize = 15;

/// Valid format strings (already XOR-ed with 0x5412) and their 5 data bits
static FORMAT_TABLE: [(u32, u32); 32] = [
    (0x5412, 0x00),
    (0x5125, 0x01),
    (0x5E7C, 0x02),
    (0x5B4B, 0x03),
    (0x45F9, 0x04),
    (0x40CE, 0x05),
    (0x4F97, 0x06),
    (0x4AA0, 0x07),
    (0x77C4, 0x08),
    (0x72F3, 0x09),
    (0x7DAA, 0x0A),
    (0x789D, 0x0B),
    (0x662F, 0x0C),
    (0x6318, 0x0D),
    (0x6C41, 0x0E),
    (0x6976, 0x0F),
    (0x1689, 0x10),
    (0x13BE, 0x11),
    (0x1CE7, 0x12),
    (0x19D0, 0x13),
    (0x0762, 0x14),
    (0x0255, 0x15),
    (0x0D0C, 0x16),
    (0x083B, 0x17),
    (0x355F, 0x18),
    (0x3068, 0x19),
    (0x3F31, 0x1A),
    (0x3A06, 0x1B),
    (0x24B4, 0x1C),
    (0x2183, 0x1D),
    (0x2EDA, 0x1E),
    (0x2BED, 0x1F),
];

/// Lookup over the 32 valid format strings
pub const FORMAT_LOOKUP: LookupTable = LookupTable::new(&FORMAT_TABLE);

/// Decoded format information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Data mask applied to the symbol
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Split the 5 data bits `(level << 3) | mask`
    pub fn from_data_bits(data: u8) -> Self {
        Self {
            ec_level: ECLevel::from_format_bits(data >> 3),
            mask_pattern: MaskPattern::from_bits(data),
        }
    }

    /// Decode a 15-bit format string, correcting up to `max_corrections` bits
    pub fn decode_bits(encoded: u32, max_corrections: usize) -> Option<Self> {
        FORMAT_LOOKUP
            .decode(encoded, max_corrections)
            .map(|data| Self::from_data_bits(data as u8))
    }

    /// Cells of copy 1, in bit order 0..15
    pub fn copy1_regions() -> [Rect; 4] {
        [
            Rect::new(8, 0, 1, 6),
            Rect::new(8, 7, 1, 2),
            Rect::new(7, 8, 1, 1),
            Rect::new(0, 8, 6, 1),
        ]
    }

    /// Cells of copy 2 for a symbol of side `size`, in bit order 0..15
    pub fn copy2_regions(size: usize) -> [Rect; 2] {
        [Rect::new(size - 8, 8, 8, 1), Rect::new(8, size - 7, 1, 7)]
    }

    /// Raw 15-bit string from one copy
    pub fn read_bits(grid: &BitMatrix, regions: &[Rect]) -> Result<u32> {
        let sampler = GridSampler::new(
            1,
            1,
            FlowDirection::LEFT_BOTTOM,
            FlowDirection::BOTTOM_LEFT,
        );
        let mut bits = BitArray::with_capacity(FORMAT_BITS);
        for &rect in regions {
            bits.append(&sampler.sample(&grid.sub_matrix(rect)?, None)?);
        }
        Ok(bits.to_number_lsb(FORMAT_BITS) as u32)
    }

    /// Read copy 1, falling back to copy 2
    pub fn read(grid: &BitMatrix, max_corrections: usize) -> Result<Self> {
        let size = grid.width();
        if size < 21 || grid.height() != size {
            return Err(DecodeError::InvalidSize {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let first = Self::read_bits(grid, &Self::copy1_regions())?;
        if let Some(info) = Self::decode_bits(first, max_corrections) {
            debug!("format: copy 1 0x{first:04X} -> {info:?}");
            return Ok(info);
        }

        let second = Self::read_bits(grid, &Self::copy2_regions(size))?;
        match Self::decode_bits(second, max_corrections) {
            Some(info) => {
                warn!("format: copy 1 0x{first:04X} unreadable, copy 2 0x{second:04X} -> {info:?}");
                Ok(info)
            }
            None => {
                warn!("format: both copies unreadable (0x{first:04X}, 0x{second:04X})");
                Err(DecodeError::InvalidFormat)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Remainder of `data << 10` modulo the format generator
    fn bch_format(data: u32) -> u32 {
        let mut rem = data << 10;
        for shift in (10..15).rev() {
            if rem & (1 << shift) != 0 {
                rem ^= 0x537 << (shift - 10);
            }
        }
        ((data << 10) | rem) ^ 0x5412
    }

    #[test]
    fn test_table_matches_bch_code() {
        for &(code, data) in FORMAT_TABLE.iter() {
            assert_eq!(bch_format(data), code, "data {data:05b}");
        }
    }

    #[test]
    fn test_exact_entries_decode() {
        for &(code, data) in FORMAT_TABLE.iter() {
            let info = FormatInfo::decode_bits(code, 0).unwrap();
            assert_eq!(info, FormatInfo::from_data_bits(data as u8));
        }
    }

    #[test]
    fn test_known_format() {
        let info = FormatInfo::decode_bits(0x4AA0, 3).unwrap();
        assert_eq!(info.ec_level, ECLevel::M);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern7);

        let info = FormatInfo::decode_bits(0x77C4, 3).unwrap();
        assert_eq!(info.ec_level, ECLevel::L);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern0);
    }

    #[test]
    fn test_correction_limit() {
        // three flipped bits still decode, four may not
        assert_eq!(
            FormatInfo::decode_bits(0x5412 ^ 0b111, 3),
            FormatInfo::decode_bits(0x5412, 0)
        );
        assert_eq!(FormatInfo::decode_bits(0x5412 ^ 0b111, 2), None);
    }

    #[test]
    fn test_read_rejects_small_grid() {
        assert!(matches!(
            FormatInfo::read(&BitMatrix::square(17), 3),
            Err(DecodeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_read_copy1_layout() {
        // Place 0x4AA0 into copy 1 by hand and read it back
        let mut grid = BitMatrix::square(21);
        let code = 0x4AA0u32;
        let cells: Vec<(usize, usize)> = (0..6)
            .map(|y| (8, y))
            .chain([(8, 7), (8, 8), (7, 8)])
            .chain((0..6).rev().map(|x| (x, 8)))
            .collect();
        for (i, &(x, y)) in cells.iter().enumerate() {
            grid.set(x, y, (code >> i) & 1 == 1);
        }
        assert_eq!(FormatInfo::read_bits(&grid, &FormatInfo::copy1_regions()).unwrap(), code);
        let info = FormatInfo::read(&grid, 3).unwrap();
        assert_eq!(info.mask_pattern, MaskPattern::Pattern7);
    }
}
