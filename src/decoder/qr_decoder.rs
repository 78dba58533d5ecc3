//! Main QR code decoder - wires every stage together
//!
//! grid -> version -> format -> unmask -> sample codewords -> Reed-Solomon -> segments

use log::debug;
use rayon::prelude::*;

use crate::decoder::bit_decoder::BitDecoder;
use crate::decoder::codewords::CodewordOrganizer;
use crate::decoder::config::DecoderConfig;
use crate::decoder::format::FormatInfo;
use crate::decoder::function_mask::data_region;
use crate::decoder::galois::Galois;
use crate::decoder::sampler::{FlowDirection, GridSampler};
use crate::decoder::unmask::unmask;
use crate::decoder::version::VersionInfo;
use crate::error::{DecodeError, Result};
use crate::models::{BitArray, BitMatrix, DataSegments, FinderMarks, MaskPattern, Version};
use crate::utils::sampling::LumaImage;

/// Column of the vertical timing pattern, skipped by the codeword walk
const TIMING_COLUMN: usize = 6;

/// Decoder holding one configuration; cheap to share across threads
#[derive(Debug, Clone, Copy)]
pub struct QrDecoder {
    config: DecoderConfig,
    gf: &'static Galois,
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl QrDecoder {
    /// Decoder with an explicit configuration
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            gf: Galois::qr(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode an already sampled symbol; its side must be `17 + 4v`
    pub fn decode_grid(&self, grid: &BitMatrix) -> Result<DataSegments> {
        let invalid_size = || DecodeError::InvalidSize {
            width: grid.width(),
            height: grid.height(),
        };
        if grid.width() != grid.height() {
            return Err(invalid_size());
        }
        let version = Version::from_size(grid.width()).ok_or_else(invalid_size)?;

        if version.has_version_info() {
            let decoded = VersionInfo::read_from_grid(grid, self.config.version_max_corrections)?;
            if decoded != version {
                return Err(DecodeError::VersionMismatch {
                    decoded: decoded.number(),
                    expected: version.number(),
                });
            }
        }
        self.decode_symbol(grid, version)
    }

    /// Decode a rectified symbol image cropped to the symbol, using the
    /// finder marks to recover the version
    pub fn decode_image(&self, image: &LumaImage, marks: &FinderMarks) -> Result<DataSegments> {
        let version = VersionInfo::from_image(image, marks, &self.config)?;
        let size = version.size();
        debug!(
            "image {}x{}: version {} ({size} modules)",
            image.width(),
            image.height(),
            version.number()
        );
        let grid = image.sample_grid(
            image.bounds(),
            size,
            size,
            self.config.sample_margin,
            self.config.luma_threshold,
        )?;
        self.decode_symbol(&grid, version)
    }

    /// Decode independent grids on the rayon pool, results in input order
    pub fn decode_batch(&self, grids: &[BitMatrix]) -> Vec<Result<DataSegments>> {
        grids.par_iter().map(|grid| self.decode_grid(grid)).collect()
    }

    /// Codeword bits of a symbol: unmask, drop the timing column, then walk
    /// the data region in 2x4 cells from the bottom-right corner
    pub fn extract_data_bits(
        grid: &BitMatrix,
        version: Version,
        pattern: MaskPattern,
    ) -> Result<BitArray> {
        let mut code = grid.clone();
        unmask(&mut code, version, pattern)?;
        let mut region = data_region(version);
        code.remove_col(TIMING_COLUMN)?;
        region.remove_col(TIMING_COLUMN)?;

        let sampler = GridSampler::new(2, 4, FlowDirection::LEFT_TOP, FlowDirection::TOP_LEFT)
            .with_mirror(false, true);
        sampler.sample(&code, Some(&region))
    }

    fn decode_symbol(&self, grid: &BitMatrix, version: Version) -> Result<DataSegments> {
        let format = FormatInfo::read(grid, self.config.format_max_corrections)?;
        debug!(
            "version {} level {:?} mask {:?}",
            version.number(),
            format.ec_level,
            format.mask_pattern
        );

        let bits = Self::extract_data_bits(grid, version, format.mask_pattern)?;
        debug!("sampled {} codeword bits", bits.len());

        let organizer = CodewordOrganizer::new(self.gf, self.config.enforce_block_capacity);
        let (data, flags) = organizer.organize(&bits, version, format.ec_level)?;

        let mut segments = DataSegments::from(BitDecoder::decode(&data, version));
        segments.flags |= flags;
        debug!(
            "decoded {} segments, corrupted: {}",
            segments.len(),
            segments.is_corrupted()
        );
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_sizes() {
        let decoder = QrDecoder::default();
        assert!(matches!(
            decoder.decode_grid(&BitMatrix::new(21, 25)),
            Err(DecodeError::InvalidSize { .. })
        ));
        assert!(matches!(
            decoder.decode_grid(&BitMatrix::square(23)),
            Err(DecodeError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_blank_grid_has_no_format() {
        let decoder = QrDecoder::default();
        assert!(matches!(
            decoder.decode_grid(&BitMatrix::square(21)),
            Err(DecodeError::InvalidFormat)
        ));
    }

    #[test]
    fn test_blank_v7_has_no_version() {
        let decoder = QrDecoder::default();
        assert!(matches!(
            decoder.decode_grid(&BitMatrix::square(45)),
            Err(DecodeError::InvalidVersion)
        ));
    }

    #[test]
    fn test_data_bit_count() {
        // the walk yields every data module, remainder bits included
        for n in [1u8, 2, 7, 21, 40] {
            let version = Version::new(n).unwrap();
            let grid = BitMatrix::square(version.size());
            let bits = QrDecoder::extract_data_bits(&grid, version, MaskPattern::Pattern0).unwrap();
            assert_eq!(bits.len(), data_region(version).count_ones(), "version {n}");
        }
    }

    #[test]
    fn test_batch_keeps_order() {
        let decoder = QrDecoder::default();
        let grids = [BitMatrix::square(21), BitMatrix::square(22)];
        let results = decoder.decode_batch(&grids);
        assert!(matches!(results[0], Err(DecodeError::InvalidFormat)));
        assert!(matches!(results[1], Err(DecodeError::InvalidSize { .. })));
    }
}
