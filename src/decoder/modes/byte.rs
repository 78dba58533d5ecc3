//! Byte mode decoder (Mode 0100) for 8-bit data

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::{finish, read_count, read_field};
use crate::models::{DataSegment, Version};

/// Raw bytes, no character set interpretation
pub struct ByteDecoder;

impl ByteDecoder {
    /// Read the byte count, then that many raw bytes
    pub fn decode(stream: &mut MsbStream<'_>, version: Version, segment: &mut DataSegment) {
        let length = read_count(stream, version, segment);
        segment.data.reserve(length);

        while !stream.is_end() && segment.data.len() < length {
            let byte = read_field(stream, 8, segment) as u8;
            segment.data.push(byte);
        }
        finish(length - segment.data.len(), segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::modes::test_util::pack;
    use crate::models::{DataMode, SegmentFlags};

    #[test]
    fn test_byte_decode() {
        let bits = pack(&[(2, 8), (0x48, 8), (0x49, 8)]);
        let mut stream = MsbStream::new(&bits);
        let mut segment = DataSegment::new(DataMode::Byte);
        ByteDecoder::decode(&mut stream, Version::new(1).unwrap(), &mut segment);
        assert_eq!(segment.data, b"HI");
        assert_eq!(segment.remainder_bits, 0);
    }

    #[test]
    fn test_non_utf8_bytes_kept() {
        let bits = pack(&[(2, 16), (0xFF, 8), (0x00, 8)]);
        let mut stream = MsbStream::new(&bits);
        let mut segment = DataSegment::new(DataMode::Byte);
        ByteDecoder::decode(&mut stream, Version::new(12).unwrap(), &mut segment);
        assert_eq!(segment.data, [0xFF, 0x00]);
    }

    #[test]
    fn test_partial_last_byte() {
        // declares 3 bytes, only 1.5 present
        let bits = pack(&[(3, 8), (0x41, 8), (0b1010, 4)]);
        let mut stream = MsbStream::new(&bits);
        let mut segment = DataSegment::new(DataMode::Byte);
        ByteDecoder::decode(&mut stream, Version::new(1).unwrap(), &mut segment);
        assert_eq!(segment.data, [0x41, 0b1010]);
        assert_eq!(segment.remainder_bits, 4);
        assert!(segment.flags.contains(SegmentFlags::TRUNCATED));
    }
}
