//! Numeric mode decoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::{finish, read_count, read_field};
use crate::models::{DataSegment, Version};

/// Digits, three per 10 bits
pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode digits as ASCII into `segment`.
    ///
    /// Each group is zero-padded to its digit count; an oversized group value
    /// keeps only its leading digits.
    pub fn decode(stream: &mut MsbStream<'_>, version: Version, segment: &mut DataSegment) {
        let mut left = read_count(stream, version, segment);

        while !stream.is_end() && left > 0 {
            let (bits_needed, group_size) = if left < 3 {
                (4 + 3 * ((left + 1) % 2), left)
            } else {
                (10, 3)
            };
            let value = read_field(stream, bits_needed, segment);
            let digits = format!("{value:0group_size$}");
            segment.data.extend_from_slice(&digits.as_bytes()[..group_size]);
            left -= group_size;
        }
        finish(left, segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::modes::test_util::pack;
    use crate::models::{DataMode, SegmentFlags};

    fn decode(bits: &crate::models::BitArray, version: u8) -> DataSegment {
        let mut stream = MsbStream::new(bits);
        let mut segment = DataSegment::new(DataMode::Numeric);
        NumericDecoder::decode(&mut stream, Version::new(version).unwrap(), &mut segment);
        segment
    }

    #[test]
    fn test_numeric_decode() {
        // "01234567": 012 345 67
        let bits = pack(&[(8, 10), (12, 10), (345, 10), (67, 7)]);
        let segment = decode(&bits, 1);
        assert_eq!(segment.data, b"01234567");
        assert!(segment.flags.is_empty());
    }

    #[test]
    fn test_single_digit_tail() {
        let bits = pack(&[(4, 10), (1, 10), (7, 4)]);
        assert_eq!(decode(&bits, 1).data, b"0017");
    }

    #[test]
    fn test_count_width_by_version() {
        // versions 10-26 use a 12-bit count
        let bits = pack(&[(2, 12), (42, 7)]);
        assert_eq!(decode(&bits, 10).data, b"42");
        let bits = pack(&[(2, 14), (42, 7)]);
        assert_eq!(decode(&bits, 27).data, b"42");
    }

    #[test]
    fn test_oversized_group_keeps_leading_digits() {
        let bits = pack(&[(3, 10), (1023, 10)]);
        assert_eq!(decode(&bits, 1).data, b"102");
    }

    #[test]
    fn test_truncated_stream() {
        let bits = pack(&[(6, 10), (123, 10)]);
        let segment = decode(&bits, 1);
        assert_eq!(segment.data, b"123");
        assert!(segment.flags.contains(SegmentFlags::TRUNCATED));
    }
}
