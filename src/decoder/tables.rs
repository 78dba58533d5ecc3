//! Block layout per version and error correction level (ISO/IEC 18004 table 9)

use crate::models::{ECLevel, Version};

/// One group of equally sized error correction blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCharacteristic {
    /// Misdecode protection codewords
    pub p: usize,
    /// Number of blocks in this group
    pub blocks: usize,
    /// Total codewords per block
    pub c: usize,
    /// Data codewords per block
    pub k: usize,
    /// Correction capacity per block
    pub r: usize,
}

impl BlockCharacteristic {
    /// Error correction codewords per block
    pub fn parity(&self) -> usize {
        self.c - self.k
    }
}

const fn bc(p: usize, blocks: usize, c: usize, k: usize, r: usize) -> BlockCharacteristic {
    BlockCharacteristic { p, blocks, c, k, r }
}

/// Index: [version - 1][ec_level]
static BLOCK_TABLE: [[&[BlockCharacteristic]; 4]; 40] = [
    // 1
    [
        &[bc(3, 1, 26, 19, 2)],
        &[bc(2, 1, 26, 16, 4)],
        &[bc(1, 1, 26, 13, 6)],
        &[bc(1, 1, 26, 9, 8)],
    ],
    // 2
    [
        &[bc(2, 1, 44, 34, 4)],
        &[bc(0, 1, 44, 28, 8)],
        &[bc(0, 1, 44, 22, 11)],
        &[bc(0, 1, 44, 16, 14)],
    ],
    // 3
    [
        &[bc(1, 1, 70, 55, 7)],
        &[bc(0, 1, 70, 44, 13)],
        &[bc(0, 2, 35, 17, 9)],
        &[bc(0, 2, 35, 13, 11)],
    ],
    // 4
    [
        &[bc(0, 1, 100, 80, 10)],
        &[bc(0, 2, 50, 32, 9)],
        &[bc(0, 2, 50, 24, 13)],
        &[bc(0, 4, 25, 9, 8)],
    ],
    // 5
    [
        &[bc(0, 1, 134, 108, 13)],
        &[bc(0, 2, 67, 43, 12)],
        &[bc(0, 2, 33, 15, 9), bc(0, 2, 34, 16, 9)],
        &[bc(0, 2, 33, 11, 11), bc(0, 2, 34, 12, 11)],
    ],
    // 6
    [
        &[bc(0, 2, 86, 68, 9)],
        &[bc(0, 4, 43, 27, 8)],
        &[bc(0, 4, 43, 19, 12)],
        &[bc(0, 4, 43, 15, 14)],
    ],
    // 7
    [
        &[bc(0, 2, 98, 78, 10)],
        &[bc(0, 4, 49, 31, 9)],
        &[bc(0, 2, 32, 14, 9), bc(0, 4, 33, 15, 9)],
        &[bc(0, 4, 39, 13, 13), bc(0, 1, 40, 14, 13)],
    ],
    // 8
    [
        &[bc(0, 2, 121, 97, 12)],
        &[bc(0, 2, 60, 38, 11), bc(0, 2, 61, 39, 11)],
        &[bc(0, 4, 40, 18, 11), bc(0, 2, 41, 19, 11)],
        &[bc(0, 4, 40, 14, 13), bc(0, 2, 41, 15, 13)],
    ],
    // 9
    [
        &[bc(0, 2, 146, 116, 15)],
        &[bc(0, 3, 58, 36, 11), bc(0, 2, 59, 37, 11)],
        &[bc(0, 4, 36, 16, 10), bc(0, 4, 37, 17, 10)],
        &[bc(0, 4, 36, 12, 12), bc(0, 4, 37, 13, 12)],
    ],
    // 10
    [
        &[bc(0, 2, 86, 68, 9), bc(0, 2, 87, 69, 9)],
        &[bc(0, 4, 69, 43, 13), bc(0, 1, 70, 44, 13)],
        &[bc(0, 6, 43, 19, 12), bc(0, 2, 44, 20, 12)],
        &[bc(0, 6, 43, 15, 14), bc(0, 2, 44, 16, 14)],
    ],
    // 11
    [
        &[bc(0, 4, 101, 81, 10)],
        &[bc(0, 1, 80, 50, 15), bc(0, 4, 81, 51, 15)],
        &[bc(0, 4, 50, 22, 14), bc(0, 4, 51, 23, 14)],
        &[bc(0, 3, 36, 12, 12), bc(0, 8, 37, 13, 12)],
    ],
    // 12
    [
        &[bc(0, 2, 116, 92, 12), bc(0, 2, 117, 93, 12)],
        &[bc(0, 6, 58, 36, 11), bc(0, 2, 59, 37, 11)],
        &[bc(0, 4, 46, 20, 13), bc(0, 6, 47, 21, 13)],
        &[bc(0, 7, 42, 14, 14), bc(0, 4, 43, 15, 14)],
    ],
    // 13
    [
        &[bc(0, 4, 133, 107, 13)],
        &[bc(0, 8, 59, 37, 11), bc(0, 1, 60, 38, 11)],
        &[bc(0, 8, 44, 20, 12), bc(0, 4, 45, 21, 12)],
        &[bc(0, 12, 33, 11, 11), bc(0, 4, 34, 12, 11)],
    ],
    // 14
    [
        &[bc(0, 3, 145, 115, 15), bc(0, 1, 146, 116, 15)],
        &[bc(0, 4, 64, 40, 12), bc(0, 5, 65, 41, 12)],
        &[bc(0, 11, 36, 16, 10), bc(0, 5, 37, 17, 10)],
        &[bc(0, 11, 36, 12, 12), bc(0, 5, 37, 13, 12)],
    ],
    // 15
    [
        &[bc(0, 5, 109, 87, 11), bc(0, 1, 110, 88, 11)],
        &[bc(0, 5, 65, 41, 12), bc(0, 5, 66, 42, 12)],
        &[bc(0, 5, 54, 24, 15), bc(0, 7, 55, 25, 15)],
        &[bc(0, 11, 36, 12, 12), bc(0, 7, 37, 13, 12)],
    ],
    // 16
    [
        &[bc(0, 5, 122, 98, 12), bc(0, 1, 123, 99, 12)],
        &[bc(0, 7, 73, 45, 14), bc(0, 3, 74, 46, 14)],
        &[bc(0, 15, 43, 19, 12), bc(0, 2, 44, 20, 12)],
        &[bc(0, 3, 45, 15, 15), bc(0, 13, 46, 16, 15)],
    ],
    // 17
    [
        &[bc(0, 1, 135, 107, 14), bc(0, 5, 136, 108, 14)],
        &[bc(0, 10, 74, 46, 14), bc(0, 1, 75, 47, 14)],
        &[bc(0, 1, 50, 22, 14), bc(0, 15, 51, 23, 14)],
        &[bc(0, 2, 42, 14, 14), bc(0, 17, 43, 15, 14)],
    ],
    // 18
    [
        &[bc(0, 5, 150, 120, 15), bc(0, 1, 151, 121, 15)],
        &[bc(0, 9, 69, 43, 13), bc(0, 4, 70, 44, 13)],
        &[bc(0, 17, 50, 22, 14), bc(0, 1, 51, 23, 14)],
        &[bc(0, 2, 42, 14, 14), bc(0, 19, 43, 15, 14)],
    ],
    // 19
    [
        &[bc(0, 3, 141, 113, 14), bc(0, 4, 142, 114, 14)],
        &[bc(0, 3, 70, 44, 13), bc(0, 11, 71, 45, 13)],
        &[bc(0, 17, 47, 21, 13), bc(0, 4, 48, 22, 13)],
        &[bc(0, 9, 39, 13, 13), bc(0, 16, 40, 14, 13)],
    ],
    // 20
    [
        &[bc(0, 3, 135, 107, 14), bc(0, 5, 136, 108, 14)],
        &[bc(0, 3, 67, 41, 13), bc(0, 13, 68, 42, 13)],
        &[bc(0, 15, 54, 24, 15), bc(0, 5, 55, 25, 15)],
        &[bc(0, 15, 43, 15, 14), bc(0, 10, 44, 16, 14)],
    ],
    // 21
    [
        &[bc(0, 4, 144, 116, 14), bc(0, 4, 145, 117, 14)],
        &[bc(0, 17, 68, 42, 13)],
        &[bc(0, 17, 50, 22, 14), bc(0, 6, 51, 23, 14)],
        &[bc(0, 19, 46, 16, 15), bc(0, 6, 47, 17, 15)],
    ],
    // 22
    [
        &[bc(0, 2, 139, 111, 14), bc(0, 7, 140, 112, 14)],
        &[bc(0, 17, 74, 46, 14)],
        &[bc(0, 7, 54, 24, 15), bc(0, 16, 55, 25, 15)],
        &[bc(0, 34, 37, 13, 12)],
    ],
    // 23
    [
        &[bc(0, 4, 151, 121, 15), bc(0, 5, 152, 122, 15)],
        &[bc(0, 4, 75, 47, 14), bc(0, 14, 76, 48, 14)],
        &[bc(0, 11, 54, 24, 15), bc(0, 14, 55, 25, 15)],
        &[bc(0, 16, 45, 15, 15), bc(0, 14, 46, 16, 15)],
    ],
    // 24
    [
        &[bc(0, 6, 147, 117, 15), bc(0, 4, 148, 118, 15)],
        &[bc(0, 6, 73, 45, 14), bc(0, 14, 74, 46, 14)],
        &[bc(0, 11, 54, 24, 15), bc(0, 16, 55, 25, 15)],
        &[bc(0, 30, 46, 16, 15), bc(0, 2, 47, 17, 15)],
    ],
    // 25
    [
        &[bc(0, 8, 132, 106, 13), bc(0, 4, 133, 107, 13)],
        &[bc(0, 8, 75, 47, 14), bc(0, 13, 76, 48, 14)],
        &[bc(0, 7, 54, 24, 15), bc(0, 22, 55, 25, 15)],
        &[bc(0, 22, 45, 15, 15), bc(0, 13, 46, 16, 15)],
    ],
    // 26
    [
        &[bc(0, 10, 142, 114, 14), bc(0, 2, 143, 115, 14)],
        &[bc(0, 19, 74, 46, 14), bc(0, 4, 75, 47, 14)],
        &[bc(0, 28, 50, 22, 14), bc(0, 6, 51, 23, 14)],
        &[bc(0, 33, 46, 16, 15), bc(0, 4, 47, 17, 15)],
    ],
    // 27
    [
        &[bc(0, 8, 152, 122, 15), bc(0, 4, 153, 123, 15)],
        &[bc(0, 22, 73, 45, 14), bc(0, 3, 74, 46, 14)],
        &[bc(0, 8, 53, 23, 15), bc(0, 26, 54, 24, 15)],
        &[bc(0, 12, 45, 15, 15), bc(0, 28, 46, 16, 15)],
    ],
    // 28
    [
        &[bc(0, 3, 147, 117, 15), bc(0, 10, 148, 118, 15)],
        &[bc(0, 3, 73, 45, 14), bc(0, 23, 74, 46, 14)],
        &[bc(0, 4, 54, 24, 15), bc(0, 31, 55, 25, 15)],
        &[bc(0, 11, 45, 15, 15), bc(0, 31, 46, 16, 15)],
    ],
    // 29
    [
        &[bc(0, 7, 146, 116, 15), bc(0, 7, 147, 117, 15)],
        &[bc(0, 21, 73, 45, 14), bc(0, 7, 74, 46, 14)],
        &[bc(0, 1, 53, 23, 15), bc(0, 37, 54, 24, 15)],
        &[bc(0, 19, 45, 15, 15), bc(0, 26, 46, 16, 15)],
    ],
    // 30
    [
        &[bc(0, 5, 145, 115, 15), bc(0, 10, 146, 116, 15)],
        &[bc(0, 19, 75, 47, 14), bc(0, 10, 76, 48, 14)],
        &[bc(0, 15, 54, 24, 15), bc(0, 25, 55, 25, 15)],
        &[bc(0, 23, 45, 15, 15), bc(0, 25, 46, 16, 15)],
    ],
    // 31
    [
        &[bc(0, 13, 145, 115, 15), bc(0, 3, 146, 116, 15)],
        &[bc(0, 2, 74, 46, 14), bc(0, 29, 75, 47, 14)],
        &[bc(0, 42, 54, 24, 15), bc(0, 1, 55, 25, 15)],
        &[bc(0, 23, 45, 15, 15), bc(0, 28, 46, 16, 15)],
    ],
    // 32
    [
        &[bc(0, 17, 145, 115, 15)],
        &[bc(0, 10, 74, 46, 14), bc(0, 23, 75, 47, 14)],
        &[bc(0, 10, 54, 24, 15), bc(0, 35, 55, 25, 15)],
        &[bc(0, 19, 45, 15, 15), bc(0, 35, 46, 16, 15)],
    ],
    // 33
    [
        &[bc(0, 17, 145, 115, 15), bc(0, 1, 146, 116, 15)],
        &[bc(0, 14, 74, 46, 14), bc(0, 21, 75, 47, 14)],
        &[bc(0, 29, 54, 24, 15), bc(0, 19, 55, 25, 15)],
        &[bc(0, 11, 45, 15, 15), bc(0, 46, 46, 16, 15)],
    ],
    // 34
    [
        &[bc(0, 13, 145, 115, 15), bc(0, 6, 146, 116, 15)],
        &[bc(0, 14, 74, 46, 14), bc(0, 23, 75, 47, 14)],
        &[bc(0, 44, 54, 24, 15), bc(0, 7, 55, 25, 15)],
        &[bc(0, 59, 46, 16, 15), bc(0, 1, 47, 17, 15)],
    ],
    // 35
    [
        &[bc(0, 12, 151, 121, 15), bc(0, 7, 152, 122, 15)],
        &[bc(0, 12, 75, 47, 14), bc(0, 26, 76, 48, 14)],
        &[bc(0, 39, 54, 24, 15), bc(0, 14, 55, 25, 15)],
        &[bc(0, 22, 45, 15, 15), bc(0, 41, 46, 16, 15)],
    ],
    // 36
    [
        &[bc(0, 6, 151, 121, 15), bc(0, 14, 152, 122, 15)],
        &[bc(0, 6, 75, 47, 14), bc(0, 34, 76, 48, 14)],
        &[bc(0, 46, 54, 24, 15), bc(0, 10, 55, 25, 15)],
        &[bc(0, 2, 45, 15, 15), bc(0, 64, 46, 16, 15)],
    ],
    // 37
    [
        &[bc(0, 17, 152, 122, 15), bc(0, 4, 153, 123, 15)],
        &[bc(0, 29, 74, 46, 14), bc(0, 14, 75, 47, 14)],
        &[bc(0, 49, 54, 24, 15), bc(0, 10, 55, 25, 15)],
        &[bc(0, 24, 45, 15, 15), bc(0, 46, 46, 16, 15)],
    ],
    // 38
    [
        &[bc(0, 4, 152, 122, 15), bc(0, 18, 153, 123, 15)],
        &[bc(0, 13, 74, 46, 14), bc(0, 32, 75, 47, 14)],
        &[bc(0, 48, 54, 24, 15), bc(0, 14, 55, 25, 15)],
        &[bc(0, 42, 45, 15, 15), bc(0, 32, 46, 16, 15)],
    ],
    // 39
    [
        &[bc(0, 20, 147, 117, 15), bc(0, 4, 148, 118, 15)],
        &[bc(0, 40, 75, 47, 14), bc(0, 7, 76, 48, 14)],
        &[bc(0, 43, 54, 24, 15), bc(0, 22, 55, 25, 15)],
        &[bc(0, 10, 45, 15, 15), bc(0, 67, 46, 16, 15)],
    ],
    // 40
    [
        &[bc(0, 19, 148, 118, 15), bc(0, 6, 149, 119, 15)],
        &[bc(0, 18, 75, 47, 14), bc(0, 31, 76, 48, 14)],
        &[bc(0, 34, 54, 24, 15), bc(0, 34, 55, 25, 15)],
        &[bc(0, 20, 45, 15, 15), bc(0, 61, 46, 16, 15)],
    ],
];

/// Block groups of `version` at `ec_level`, one or two entries
pub fn block_characteristics(version: Version, ec_level: ECLevel) -> &'static [BlockCharacteristic] {
    BLOCK_TABLE[version.number() as usize - 1][ec_level.index()]
}

/// Total data codewords of `version` at `ec_level`
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    block_characteristics(version, ec_level)
        .iter()
        .map(|b| b.blocks * b.k)
        .sum()
}

/// Total codewords of `version`, the same for every level
pub fn total_codewords(version: Version) -> usize {
    block_characteristics(version, ECLevel::L)
        .iter()
        .map(|b| b.blocks * b.c)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::function_mask::FunctionMask;

    const LEVELS: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    #[test]
    fn test_known_layouts() {
        let v1 = Version::new(1).unwrap();
        assert_eq!(block_characteristics(v1, ECLevel::M), &[bc(2, 1, 26, 16, 4)]);
        assert_eq!(data_codewords(v1, ECLevel::M), 16);

        let v5 = Version::new(5).unwrap();
        assert_eq!(
            block_characteristics(v5, ECLevel::Q),
            &[bc(0, 2, 33, 15, 9), bc(0, 2, 34, 16, 9)]
        );
        assert_eq!(total_codewords(Version::new(40).unwrap()), 3706);
    }

    #[test]
    fn test_levels_share_total_codewords() {
        for n in 1..=40 {
            let version = Version::new(n).unwrap();
            let data_bits = FunctionMask::new(version).data_modules_count();
            for level in LEVELS {
                let total: usize = block_characteristics(version, level)
                    .iter()
                    .map(|b| b.blocks * b.c)
                    .sum();
                assert_eq!(total, data_bits / 8, "version {n} level {level:?}");
            }
        }
    }

    #[test]
    fn test_groups_are_consistent() {
        for n in 1..=40 {
            let version = Version::new(n).unwrap();
            for level in LEVELS {
                let groups = block_characteristics(version, level);
                assert!(!groups.is_empty() && groups.len() <= 2);
                let parity = groups[0].parity();
                for group in groups {
                    assert_eq!(group.parity(), parity);
                    assert!(group.r * 2 + group.p <= parity);
                }
                if let [first, second] = groups {
                    assert_eq!(first.c + 1, second.c);
                    assert_eq!(first.k + 1, second.k);
                }
            }
        }
    }
}
