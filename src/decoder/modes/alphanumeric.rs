//! Alphanumeric mode decoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::{finish, read_count, read_field};
use crate::models::{DataSegment, Version};

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Stand-in for a value outside the table
const INVALID_CHAR: u8 = b'~';

fn lookup(value: u64) -> u8 {
    ALPHANUMERIC_TABLE
        .get(value as usize)
        .copied()
        .unwrap_or(INVALID_CHAR)
}

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Decode characters through the 45-entry table into `segment`
    pub fn decode(stream: &mut MsbStream<'_>, version: Version, segment: &mut DataSegment) {
        let mut left = read_count(stream, version, segment);

        while !stream.is_end() && left > 0 {
            if left >= 2 {
                let value = read_field(stream, 11, segment);
                segment.data.push(lookup(value / 45));
                segment.data.push(lookup(value % 45));
                left -= 2;
            } else {
                let value = read_field(stream, 6, segment);
                segment.data.push(lookup(value));
                left -= 1;
            }
        }
        finish(left, segment);
    }
}
