//! Decoded data segments
//!
//! A symbol decodes into an ordered list of segments, one per mode indicator
//! read from the corrected codeword stream:
//! - each segment owns its bytes and records the mode that produced them
//! - the list carries a symbol-level `CORRUPTED` flag when any error
//!   correction block could not be repaired

use bitflags::bitflags;

bitflags! {
    /// Flags attached to a whole decode result.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SegmentsFlags: u32 {
        /// At least one error correction block failed to correct
        const CORRUPTED = 1 << 0;
    }
}

bitflags! {
    /// Flags attached to a single segment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SegmentFlags: u32 {
        /// Stream ended before the declared character count was read
        const TRUNCATED = 1 << 0;
    }
}

/// Data encoding mode, tagged by its 4-bit indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataMode {
    /// Digits, three per 10 bits
    Numeric,
    /// 45-character set, two per 11 bits
    Alphanumeric,
    /// Sequence indicator and parity of a multi-symbol message
    StructuredAppend,
    /// Raw 8-bit bytes
    Byte,
    /// FNC1 in first position (GS1)
    Fnc1First,
    /// Extended Channel Interpretation designator
    Eci,
    /// Shift JIS double-byte characters, 13 bits each
    Kanji,
    /// FNC1 in second position with application indicator
    Fnc1Second,
}

/// Indicator value to mode, in indicator order
const MODE_TABLE: [(u32, DataMode); 8] = [
    (0b0001, DataMode::Numeric),
    (0b0010, DataMode::Alphanumeric),
    (0b0011, DataMode::StructuredAppend),
    (0b0100, DataMode::Byte),
    (0b0101, DataMode::Fnc1First),
    (0b0111, DataMode::Eci),
    (0b1000, DataMode::Kanji),
    (0b1001, DataMode::Fnc1Second),
];

impl DataMode {
    /// Indicator value that ends the segment list
    pub const TERMINATOR: u32 = 0;
    /// Width of the mode indicator for versions 1-40
    pub const INDICATOR_BITS: usize = 4;

    /// Mode for an indicator value, `None` for the terminator and unknown values
    pub fn from_indicator(indicator: u32) -> Option<Self> {
        MODE_TABLE
            .iter()
            .find(|(value, _)| *value == indicator)
            .map(|&(_, mode)| mode)
    }

    /// The 4-bit indicator for this mode
    pub fn indicator(&self) -> u32 {
        MODE_TABLE
            .iter()
            .find(|(_, mode)| mode == self)
            .map(|&(value, _)| value)
            .unwrap_or(Self::TERMINATOR)
    }

    /// Character count field width per version tier, `None` for modes without one
    pub fn count_bits(&self, tier: usize) -> Option<usize> {
        let widths: [usize; 3] = match self {
            DataMode::Numeric => [10, 12, 14],
            DataMode::Alphanumeric => [9, 11, 13],
            DataMode::Byte => [8, 16, 16],
            DataMode::Kanji => [8, 10, 12],
            _ => return None,
        };
        widths.get(tier).copied()
    }

    /// Modes whose bytes are character data
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            DataMode::Numeric | DataMode::Alphanumeric | DataMode::Byte
        )
    }
}

/// Split form of a structured append header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredAppend {
    /// Position of this symbol, 0-based
    pub position: u8,
    /// Total number of symbols in the message
    pub total: u8,
    /// Parity byte of the whole message
    pub parity: u8,
}

/// One decoded segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment {
    /// Decoded bytes
    pub data: Vec<u8>,
    /// Mode that produced the bytes
    pub mode: DataMode,
    /// Per-segment flags
    pub flags: SegmentFlags,
    /// Bits missing from the final read of the segment
    pub remainder_bits: usize,
}

impl DataSegment {
    /// Empty segment for `mode`
    pub fn new(mode: DataMode) -> Self {
        Self {
            data: Vec::new(),
            mode,
            flags: SegmentFlags::empty(),
            remainder_bits: 0,
        }
    }

    /// ECI assignment number folded from the designator bytes
    pub fn eci_designator(&self) -> Option<u32> {
        if self.mode != DataMode::Eci || self.data.is_empty() || self.data.len() > 3 {
            return None;
        }
        Some(
            self.data
                .iter()
                .fold(0u32, |acc, &byte| (acc << 8) | byte as u32),
        )
    }

    /// Structured append header split into its fields
    pub fn structured_append(&self) -> Option<StructuredAppend> {
        if self.mode != DataMode::StructuredAppend || self.data.len() != 2 {
            return None;
        }
        Some(StructuredAppend {
            position: self.data[0] >> 4,
            total: (self.data[0] & 0x0F) + 1,
            parity: self.data[1],
        })
    }
}

/// Ordered decode result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSegments {
    segments: Vec<DataSegment>,
    /// Result-level flags
    pub flags: SegmentsFlags,
}

impl DataSegments {
    /// Empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment
    pub fn push(&mut self, segment: DataSegment) {
        self.segments.push(segment);
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when no segment was decoded
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate segments in stream order
    pub fn iter(&self) -> std::slice::Iter<'_, DataSegment> {
        self.segments.iter()
    }

    /// Borrow the segments
    pub fn as_slice(&self) -> &[DataSegment] {
        &self.segments
    }

    /// True when an error correction block failed
    pub fn is_corrupted(&self) -> bool {
        self.flags.contains(SegmentsFlags::CORRUPTED)
    }

    /// Raise the corrupted flag
    pub fn mark_corrupted(&mut self) {
        self.flags.insert(SegmentsFlags::CORRUPTED);
    }

    /// Concatenated raw bytes of the textual segments
    pub fn payload(&self) -> Vec<u8> {
        self.segments
            .iter()
            .filter(|s| s.mode.is_textual())
            .flat_map(|s| s.data.iter().copied())
            .collect()
    }

    /// Textual segments rendered as lossy UTF-8
    pub fn to_text(&self) -> String {
        let bytes: Vec<u8> = self
            .segments
            .iter()
            .filter(|s| s.mode.is_textual())
            .flat_map(|s| s.data.iter().copied())
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl From<Vec<DataSegment>> for DataSegments {
    fn from(segments: Vec<DataSegment>) -> Self {
        Self {
            segments,
            flags: SegmentsFlags::empty(),
        }
    }
}

impl<'a> IntoIterator for &'a DataSegments {
    type Item = &'a DataSegment;
    type IntoIter = std::slice::Iter<'a, DataSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
