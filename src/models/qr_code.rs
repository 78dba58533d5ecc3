/// Alignment pattern center coordinates per version, `-1` marks an unused slot.
/// Row `v - 1` holds version `v`.
pub const ALIGNMENT_PATTERN_CENTERS: [[i16; 7]; 40] = [
    [-1, -1, -1, -1, -1, -1, -1],
    [6, 18, -1, -1, -1, -1, -1],
    [6, 22, -1, -1, -1, -1, -1],
    [6, 26, -1, -1, -1, -1, -1],
    [6, 30, -1, -1, -1, -1, -1],
    [6, 34, -1, -1, -1, -1, -1],
    [6, 22, 38, -1, -1, -1, -1],
    [6, 24, 42, -1, -1, -1, -1],
    [6, 26, 46, -1, -1, -1, -1],
    [6, 28, 50, -1, -1, -1, -1],
    [6, 30, 54, -1, -1, -1, -1],
    [6, 32, 58, -1, -1, -1, -1],
    [6, 34, 62, -1, -1, -1, -1],
    [6, 26, 46, 66, -1, -1, -1],
    [6, 26, 48, 70, -1, -1, -1],
    [6, 26, 50, 74, -1, -1, -1],
    [6, 30, 54, 78, -1, -1, -1],
    [6, 30, 56, 82, -1, -1, -1],
    [6, 30, 58, 86, -1, -1, -1],
    [6, 34, 62, 90, -1, -1, -1],
    [6, 28, 50, 72, 94, -1, -1],
    [6, 26, 50, 74, 98, -1, -1],
    [6, 30, 54, 78, 102, -1, -1],
    [6, 28, 54, 80, 106, -1, -1],
    [6, 32, 58, 84, 110, -1, -1],
    [6, 30, 58, 86, 114, -1, -1],
    [6, 34, 62, 90, 118, -1, -1],
    [6, 26, 50, 74, 98, 122, -1],
    [6, 30, 54, 78, 102, 126, -1],
    [6, 26, 52, 78, 104, 130, -1],
    [6, 30, 56, 82, 108, 134, -1],
    [6, 34, 60, 86, 112, 138, -1],
    [6, 30, 58, 86, 114, 142, -1],
    [6, 34, 62, 90, 118, 146, -1],
    [6, 30, 54, 78, 102, 126, 150],
    [6, 24, 50, 76, 102, 128, 154],
    [6, 28, 54, 80, 106, 132, 158],
    [6, 32, 58, 84, 110, 136, 162],
    [6, 26, 54, 82, 110, 138, 166],
    [6, 30, 58, 86, 114, 142, 170],
];

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version number
    pub const MIN: u8 = 1;
    /// Largest version number
    pub const MAX: u8 = 40;
    /// First version that carries version information blocks
    pub const FIRST_WITH_VERSION_INFO: u8 = 7;

    /// Version from its number, `None` outside 1..=40
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&number).then_some(Self(number))
    }

    /// Version whose side length is `size`
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || (size - 17) % 4 != 0 {
            return None;
        }
        u8::try_from((size - 17) / 4).ok().and_then(Self::new)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Bits per codeword, fixed for QR
    pub fn codeword_bits(&self) -> usize {
        8
    }

    /// Versions 7 and up carry two 18-bit version blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= Self::FIRST_WITH_VERSION_INFO
    }

    /// Character-count width tier: 0 below version 10, 1 below 27, 2 otherwise
    pub fn count_tier(&self) -> usize {
        match self.0 {
            0..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }

    /// Alignment pattern center coordinates along one axis
    pub fn alignment_centers(&self) -> Vec<usize> {
        ALIGNMENT_PATTERN_CENTERS[self.0 as usize - 1]
            .iter()
            .filter(|&&c| c >= 0)
            .map(|&c| c as usize)
            .collect()
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Level from the two format-information bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// The two format-information bits for this level
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Table index, L=0 through H=3
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from the low three bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MaskPattern::Pattern0,
            1 => MaskPattern::Pattern1,
            2 => MaskPattern::Pattern2,
            3 => MaskPattern::Pattern3,
            4 => MaskPattern::Pattern4,
            5 => MaskPattern::Pattern5,
            6 => MaskPattern::Pattern6,
            _ => MaskPattern::Pattern7,
        }
    }

    /// Check if module at row `i`, column `j` is inverted by this pattern
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}
