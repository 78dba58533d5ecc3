//! FNC1 mode decoders (Mode 0101 first position, Mode 1001 second position)

use crate::decoder::bitstream::MsbStream;
use crate::decoder::modes::read_field;
use crate::models::DataSegment;

/// FNC1 in first position: a bare marker, no payload
pub struct Fnc1FirstDecoder;

impl Fnc1FirstDecoder {
    /// Nothing to read
    pub fn decode(_stream: &mut MsbStream<'_>, _segment: &mut DataSegment) {}
}

/// FNC1 in second position: one application indicator byte
pub struct Fnc1SecondDecoder;

impl Fnc1SecondDecoder {
    /// Push the application indicator byte
    pub fn decode(stream: &mut MsbStream<'_>, segment: &mut DataSegment) {
        let byte = read_field(stream, 8, segment) as u8;
        segment.data.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::modes::test_util::pack;
    use crate::models::DataMode;

    #[test]
    fn test_first_position_reads_nothing() {
        let bits = pack(&[(0xFF, 8)]);
        let mut stream = MsbStream::new(&bits);
        let mut segment = DataSegment::new(DataMode::Fnc1First);
        Fnc1FirstDecoder::decode(&mut stream, &mut segment);
        assert!(segment.data.is_empty());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_second_position_indicator() {
        let bits = pack(&[(0x41, 8)]);
        let mut stream = MsbStream::new(&bits);
        let mut segment = DataSegment::new(DataMode::Fnc1Second);
        Fnc1SecondDecoder::decode(&mut stream, &mut segment);
        assert_eq!(segment.data, [0x41]);
    }
}
