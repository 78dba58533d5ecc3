//! Structured append decoder (Mode 0011)
//! Sequence byte (position nibble, total - 1 nibble) then parity byte

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::read_field;
use crate::models::DataSegment;

/// Reads the two structured append header bytes
pub struct StructuredAppendDecoder;

impl StructuredAppendDecoder {
    /// Push the sequence and parity bytes; stops early at the end of the stream
    pub fn decode(stream: &mut MsbStream<'_>, segment: &mut DataSegment) {
        for _ in 0..2 {
            if stream.is_end() {
                break;
            }
            let byte = read_field(stream, 8, segment) as u8;
            segment.data.push(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::modes::test_util::pack;
    use crate::models::{DataMode, StructuredAppend};

    #[test]
    fn test_header() {
        // symbol 2 of 4, parity 0xA7
        let bits = pack(&[(0x13, 8), (0xA7, 8)]);
        let mut stream = MsbStream::new(&bits);
        let mut segment = DataSegment::new(DataMode::StructuredAppend);
        StructuredAppendDecoder::decode(&mut stream, &mut segment);
        assert_eq!(segment.data, [0x13, 0xA7]);
        assert_eq!(
            segment.structured_append(),
            Some(StructuredAppend {
                position: 1,
                total: 4,
                parity: 0xA7
            })
        );
    }
}
