//! Kanji mode decoder (Mode 1000)
//!
//! Each character is a 13-bit value rebuilt into a two-byte Shift JIS code:
//! `(v % 0xC0) | ((v / 0xC0) << 8)`, then offset by 0x8140 for the
//! 0x8140-0x9FFC range or 0xC140 for 0xE040-0xEBBF.

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::{finish, read_count, read_field};
use crate::models::{DataSegment, Version};

/// Bits per Kanji character
pub const KANJI_BITS: usize = 13;

/// Shift JIS code for a 13-bit Kanji value
pub fn to_shift_jis(value: u16) -> u16 {
    let packed = (value % 0xC0) | ((value / 0xC0) << 8);
    if packed < 0x1F00 {
        packed + 0x8140
    } else {
        packed + 0xC140
    }
}

/// Shift JIS characters, 13 bits each
pub struct KanjiDecoder;

impl KanjiDecoder {
    /// Decode characters as big-endian Shift JIS byte pairs
    pub fn decode(stream: &mut MsbStream<'_>, version: Version, segment: &mut DataSegment) {
        let mut left = read_count(stream, version, segment);

        while !stream.is_end() && left > 0 {
            let value = read_field(stream, KANJI_BITS, segment) as u16;
            segment.data.extend_from_slice(&to_shift_jis(value).to_be_bytes());
            left -= 1;
        }
        finish(left, segment);
    }
}
