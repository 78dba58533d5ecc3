//! Mode-indicator loop over the corrected data bits

use log::debug;

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::decode_segment;
use crate::models::{BitArray, DataMode, DataSegment, Version};

/// Splits a data bit stream into segments
pub struct BitDecoder;

impl BitDecoder {
    /// Decode segments until the terminator, an unknown mode, or the end of `bits`.
    ///
    /// A mode indicator cut short by the end of the stream is treated as padding.
    pub fn decode(bits: &BitArray, version: Version) -> Vec<DataSegment> {
        let mut stream = MsbStream::new(bits);
        let mut segments = Vec::new();

        while !stream.is_end() {
            let indicator = stream.read_bits(DataMode::INDICATOR_BITS) as u32;
            if stream.last_read_bits() < DataMode::INDICATOR_BITS {
                break;
            }
            let Some(mode) = DataMode::from_indicator(indicator) else {
                if indicator != DataMode::TERMINATOR {
                    debug!("bit decoder: unknown mode {indicator:#06b}, stopping");
                }
                break;
            };
            segments.push(decode_segment(mode, &mut stream, version));
        }

        debug!(
            "bit decoder: {} segments from {} bits",
            segments.len(),
            bits.len()
        );
        segments
    }
}
