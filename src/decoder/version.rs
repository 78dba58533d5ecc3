//! Version recovery
//!
//! Versions 7 and up carry two copies of an 18-bit version string (6 data
//! bits, 12 BCH bits): a 3x6 block left of the top-right finder and a 6x3
//! block above the bottom-left finder. Smaller versions carry none and are
//! known from the symbol size alone.

use log::{debug, warn};

use crate::decoder::bch::LookupTable;
use crate::decoder::config::DecoderConfig;
use crate::decoder::sampler::{FlowDirection, GridSampler};
use crate::error::{DecodeError, Result};
use crate::models::{BitMatrix, FinderMarks, Rect, Version};
use crate::utils::sampling::LumaImage;

/// Width of the encoded version string
pub const VERSION_BITS: usize = 18;

/// Valid version strings for versions 7..=40
static VERSION_TABLE: [(u32, u32); 34] = [
    (0x07C94, 7),
    (0x085BC, 8),
    (0x09A99, 9),
    (0x0A4D3, 10),
    (0x0BBF6, 11),
    (0x0C762, 12),
    (0x0D847, 13),
    (0x0E60D, 14),
    (0x0F928, 15),
    (0x10B78, 16),
    (0x1145D, 17),
    (0x12A17, 18),
    (0x13532, 19),
    (0x149A6, 20),
    (0x15683, 21),
    (0x168C9, 22),
    (0x177EC, 23),
    (0x18EC4, 24),
    (0x191E1, 25),
    (0x1AFAB, 26),
    (0x1B08E, 27),
    (0x1CC1A, 28),
    (0x1D33F, 29),
    (0x1ED75, 30),
    (0x1F250, 31),
    (0x209D5, 32),
    (0x216F0, 33),
    (0x228BA, 34),
    (0x2379F, 35),
    (0x24B0B, 36),
    (0x2542E, 37),
    (0x26A64, 38),
    (0x27541, 39),
    (0x28C69, 40),
];

/// Lookup over the valid version strings
pub const VERSION_LOOKUP: LookupTable = LookupTable::new(&VERSION_TABLE);

/// Version block sizes in modules (width, height)
const TOP_RIGHT_BLOCK: (usize, usize) = (3, 6);
const BOTTOM_LEFT_BLOCK: (usize, usize) = (6, 3);

/// Version string reader
pub struct VersionInfo;

impl VersionInfo {
    /// Decode an 18-bit version string, correcting up to `max_corrections` bits
    pub fn decode_bits(encoded: u32, max_corrections: usize) -> Option<Version> {
        VERSION_LOOKUP
            .decode(encoded, max_corrections)
            .and_then(|v| Version::new(v as u8))
    }

    /// Top-right version block of a symbol of side `size`
    pub fn top_right_region(size: usize) -> Rect {
        Rect::new(size - 11, 0, TOP_RIGHT_BLOCK.0, TOP_RIGHT_BLOCK.1)
    }

    /// Bottom-left version block of a symbol of side `size`
    pub fn bottom_left_region(size: usize) -> Rect {
        Rect::new(0, size - 11, BOTTOM_LEFT_BLOCK.0, BOTTOM_LEFT_BLOCK.1)
    }

    /// Raw version string of one block. The whole block is a single sampling
    /// cell walked along `flow`, first bit least significant.
    pub fn read_block(block: &BitMatrix, flow: FlowDirection) -> Result<u32> {
        let sampler = GridSampler::new(block.width(), block.height(), flow, flow);
        Ok(sampler.sample(block, None)?.to_number_lsb(VERSION_BITS) as u32)
    }

    /// Version from the blocks of a sampled symbol: top-right first, then bottom-left
    pub fn read_from_grid(grid: &BitMatrix, max_corrections: usize) -> Result<Version> {
        let size = grid.width();
        if size < 45 || grid.height() != size {
            return Err(DecodeError::InvalidSize {
                width: grid.width(),
                height: grid.height(),
            });
        }

        let upper = grid.sub_matrix(Self::top_right_region(size))?;
        let encoded = Self::read_block(&upper, FlowDirection::RIGHT_BOTTOM)?;
        if let Some(version) = Self::decode_bits(encoded, max_corrections) {
            debug!("version: top-right block 0x{encoded:05X} -> {}", version.number());
            return Ok(version);
        }

        let lower = grid.sub_matrix(Self::bottom_left_region(size))?;
        let fallback = Self::read_block(&lower, FlowDirection::BOTTOM_RIGHT)?;
        match Self::decode_bits(fallback, max_corrections) {
            Some(version) => {
                warn!(
                    "version: top-right block 0x{encoded:05X} unreadable, bottom-left 0x{fallback:05X} -> {}",
                    version.number()
                );
                Ok(version)
            }
            None => Err(DecodeError::InvalidVersion),
        }
    }

    /// Rough version from the spacing of the two upper finder marks.
    ///
    /// `D` is the center distance and `X = (W_TL + W_TR) / 14` the module
    /// pitch; both are truncated to integers before `V = (D / X - 10) / 4`.
    pub fn estimate_from_marks(marks: &FinderMarks) -> Option<i32> {
        let distance = marks.top_left.center.distance(&marks.top_right.center) as i32;
        let pitch = ((marks.top_left.width + marks.top_right.width) / 14.0) as i32;
        if pitch <= 0 {
            return None;
        }
        Some(((distance as f64 / pitch as f64 - 10.0) / 4.0) as i32)
    }

    /// Version of a rectified symbol image.
    ///
    /// Small estimates are trusted as-is; from version 7 on the version blocks
    /// are sampled next to the top-right mark, then next to the bottom-left
    /// mark, and the estimate is the last resort.
    pub fn from_image(
        image: &LumaImage,
        marks: &FinderMarks,
        config: &DecoderConfig,
    ) -> Result<Version> {
        let estimate = Self::estimate_from_marks(marks).ok_or(DecodeError::InvalidVersion)?;
        debug!("version: estimate {estimate} from finder spacing");
        if estimate < Version::FIRST_WITH_VERSION_INFO as i32 {
            return u8::try_from(estimate)
                .ok()
                .and_then(Version::new)
                .ok_or(DecodeError::InvalidVersion);
        }

        let cp_tr = marks.top_right.module_size();
        let upper = pixel_rect(
            image.width() as f32 - 11.0 * cp_tr,
            0.0,
            TOP_RIGHT_BLOCK.0 as f32 * cp_tr,
            TOP_RIGHT_BLOCK.1 as f32 * cp_tr,
        );
        if let Some(version) =
            Self::sample_block(image, upper, TOP_RIGHT_BLOCK, FlowDirection::RIGHT_BOTTOM, config)
        {
            return Ok(version);
        }

        let cp_bl = marks.bottom_left.module_size();
        let lower = pixel_rect(
            0.0,
            image.height() as f32 - 11.0 * cp_bl,
            BOTTOM_LEFT_BLOCK.0 as f32 * cp_bl,
            BOTTOM_LEFT_BLOCK.1 as f32 * cp_bl,
        );
        if let Some(version) =
            Self::sample_block(image, lower, BOTTOM_LEFT_BLOCK, FlowDirection::BOTTOM_RIGHT, config)
        {
            return Ok(version);
        }

        warn!("version: both blocks unreadable, using estimate {estimate}");
        u8::try_from(estimate)
            .ok()
            .and_then(Version::new)
            .ok_or(DecodeError::InvalidVersion)
    }

    fn sample_block(
        image: &LumaImage,
        roi: Option<Rect>,
        (cols, rows): (usize, usize),
        flow: FlowDirection,
        config: &DecoderConfig,
    ) -> Option<Version> {
        let block = image
            .sample_grid(roi?, cols, rows, config.sample_margin, config.luma_threshold)
            .ok()?;
        let encoded = Self::read_block(&block, flow).ok()?;
        let version = Self::decode_bits(encoded, config.version_max_corrections);
        debug!("version: image block 0x{encoded:05X} -> {version:?}");
        version
    }
}

/// Pixel rectangle with truncated corners, `None` when it starts off-image
fn pixel_rect(x: f32, y: f32, width: f32, height: f32) -> Option<Rect> {
    if x < 0.0 || y < 0.0 || width < 1.0 || height < 1.0 {
        return None;
    }
    Some(Rect::new(
        x as usize,
        y as usize,
        width as usize,
        height as usize,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinderMark, Point};

    /// BCH(18,6) codeword for `version`
    fn bch_version(version: u32) -> u32 {
        let mut rem = version << 12;
        for shift in (12..18).rev() {
            if rem & (1 << shift) != 0 {
                rem ^= 0x1F25 << (shift - 12);
            }
        }
        (version << 12) | rem
    }

    fn place_block(grid: &mut BitMatrix, encoded: u32, top_right: bool) {
        let size = grid.width();
        for i in 0..VERSION_BITS {
            let bit = (encoded >> i) & 1 == 1;
            if top_right {
                grid.set(size - 11 + i % 3, i / 3, bit);
            } else {
                grid.set(i / 3, size - 11 + i % 3, bit);
            }
        }
    }

    #[test]
    fn test_table_matches_bch_code() {
        for &(code, version) in VERSION_TABLE.iter() {
            assert_eq!(bch_version(version), code, "version {version}");
        }
    }

    #[test]
    fn test_every_entry_decodes_exactly() {
        for &(code, version) in VERSION_TABLE.iter() {
            assert_eq!(
                VersionInfo::decode_bits(code, 0).map(|v| v.number() as u32),
                Some(version)
            );
        }
    }

    #[test]
    fn test_correction() {
        let damaged = 0x07C94 ^ 0b1000_0000_0100_0001;
        assert_eq!(VersionInfo::decode_bits(damaged, 3), Version::new(7));
        assert_eq!(VersionInfo::decode_bits(damaged, 2), None);
    }

    #[test]
    fn test_read_from_grid_both_blocks() {
        let mut grid = BitMatrix::square(45);
        place_block(&mut grid, 0x07C94, true);
        place_block(&mut grid, 0x07C94, false);
        assert_eq!(VersionInfo::read_from_grid(&grid, 3).unwrap(), Version::new(7).unwrap());
    }

    #[test]
    fn test_read_from_grid_falls_back() {
        let mut grid = BitMatrix::square(45);
        place_block(&mut grid, 0x07C94 ^ 0x3FFFF, true);
        place_block(&mut grid, 0x07C94, false);
        assert_eq!(VersionInfo::read_from_grid(&grid, 3).unwrap(), Version::new(7).unwrap());

        place_block(&mut grid, 0x07C94 ^ 0x3FFFF, false);
        assert!(matches!(
            VersionInfo::read_from_grid(&grid, 3),
            Err(DecodeError::InvalidVersion)
        ));
    }

    #[test]
    fn test_estimate_from_marks() {
        // Version 1 at 10 px per module: centers 14 modules apart, marks 70 px wide
        let mark = |x: f32| FinderMark::new(Point::new(x, 35.0), 70.0);
        let marks = FinderMarks::new(mark(35.0), mark(35.0), mark(175.0));
        assert_eq!(VersionInfo::estimate_from_marks(&marks), Some(1));

        // Version 7: 45 - 7 = 38 modules apart
        let marks = FinderMarks::new(mark(35.0), mark(35.0), mark(35.0 + 380.0));
        assert_eq!(VersionInfo::estimate_from_marks(&marks), Some(7));

        let flat = FinderMarks::new(mark(0.0), FinderMark::default(), FinderMark::default());
        assert_eq!(VersionInfo::estimate_from_marks(&flat), None);
    }
}
