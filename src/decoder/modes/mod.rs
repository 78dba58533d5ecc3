//! QR code data mode decoders
//!
//! One decoder per mode, all reading from a high-bit-first stream:
//! - Numeric, Alphanumeric, Byte, Kanji: character count then payload
//! - ECI: 1 to 3 designator bytes
//! - FNC1 (first / second position) and Structured Append: fixed headers

/// Alphanumeric mode
pub mod alphanumeric;
/// Byte mode
pub mod byte;
/// ECI designators
pub mod eci;
/// FNC1 markers
pub mod fnc1;
/// Kanji mode
pub mod kanji;
/// Numeric mode
pub mod numeric;
/// Structured append header
pub mod structured_append;

use log::trace;

use crate::decoder::bitstream::MsbStream;
use crate::models::{DataMode, DataSegment, SegmentFlags, Version};

use alphanumeric::AlphanumericDecoder;
use byte::ByteDecoder;
use eci::EciDecoder;
use fnc1::{Fnc1FirstDecoder, Fnc1SecondDecoder};
use kanji::KanjiDecoder;
use numeric::NumericDecoder;
use structured_append::StructuredAppendDecoder;

/// Decode one segment of `mode`; the mode indicator has already been read
pub fn decode_segment(mode: DataMode, stream: &mut MsbStream<'_>, version: Version) -> DataSegment {
    let mut segment = DataSegment::new(mode);
    match mode {
        DataMode::Numeric => NumericDecoder::decode(stream, version, &mut segment),
        DataMode::Alphanumeric => AlphanumericDecoder::decode(stream, version, &mut segment),
        DataMode::Byte => ByteDecoder::decode(stream, version, &mut segment),
        DataMode::Kanji => KanjiDecoder::decode(stream, version, &mut segment),
        DataMode::Eci => EciDecoder::decode(stream, &mut segment),
        DataMode::Fnc1First => Fnc1FirstDecoder::decode(stream, &mut segment),
        DataMode::Fnc1Second => Fnc1SecondDecoder::decode(stream, &mut segment),
        DataMode::StructuredAppend => StructuredAppendDecoder::decode(stream, &mut segment),
    }
    trace!(
        "segment {mode:?}: {} bytes, flags {:?}, remainder {}",
        segment.data.len(),
        segment.flags,
        segment.remainder_bits
    );
    segment
}

/// Read a `width`-bit field, recording a short read on `segment`
pub(crate) fn read_field(stream: &mut MsbStream<'_>, width: usize, segment: &mut DataSegment) -> u64 {
    let value = stream.read_bits(width);
    segment.remainder_bits = width - stream.last_read_bits();
    if segment.remainder_bits > 0 {
        segment.flags |= SegmentFlags::TRUNCATED;
    }
    value
}

/// Character count field of `segment.mode` at `version`
pub(crate) fn read_count(stream: &mut MsbStream<'_>, version: Version, segment: &mut DataSegment) -> usize {
    let width = segment.mode.count_bits(version.count_tier()).unwrap_or(0);
    read_field(stream, width, segment) as usize
}

/// Flag `segment` when the stream ran out with `left` characters still declared
pub(crate) fn finish(left: usize, segment: &mut DataSegment) {
    if left > 0 {
        segment.flags |= SegmentFlags::TRUNCATED;
    }
}
