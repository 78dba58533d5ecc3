//! ECI mode decoder (Mode 0111)
//!
//! The designator prefix of the first byte gives its length:
//! `0xxxxxxx` one byte, `10xxxxxx` two bytes, `110xxxxx` three bytes.
//! The prefix bits are stripped from the first byte; the rest are raw.

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::read_field;
use crate::models::DataSegment;

/// Reads one ECI designator
pub struct EciDecoder;

impl EciDecoder {
    /// Push the 1 to 3 designator bytes onto `segment`
    pub fn decode(stream: &mut MsbStream<'_>, segment: &mut DataSegment) {
        let first = read_field(stream, 8, segment) as u8;
        let (value, extra) = if first & 0x80 == 0 {
            (first & 0x7F, 0)
        } else if first & 0x40 == 0 {
            (first & 0x3F, 1)
        } else {
            (first & 0x1F, 2)
        };
        segment.data.push(value);
        for _ in 0..extra {
            let byte = read_field(stream, 8, segment) as u8;
            segment.data.push(byte);
        }
    }
}
