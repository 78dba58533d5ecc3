/// BCH-protected header lookup (format and version strings)
///
/// Valid codewords are few enough to match by table: an exact hit wins,
/// otherwise the nearest entry by Hamming distance is accepted when it is
/// within the correction bound. Ties go to the smallest codeword.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    entries: &'static [(u32, u32)],
}

/// Number of differing bits
#[inline]
pub fn hamming_distance(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

impl LookupTable {
    /// Table over `(codeword, value)` pairs
    pub const fn new(entries: &'static [(u32, u32)]) -> Self {
        Self { entries }
    }

    /// Number of valid codewords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for an empty table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored for an exact codeword
    pub fn find(&self, encoded: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|(code, _)| *code == encoded)
            .map(|&(_, value)| value)
    }

    /// Nearest valid codeword and its distance, if within `max_corrections`
    pub fn correct(&self, encoded: u32, max_corrections: usize) -> Option<(u32, u32)> {
        let (code, distance) = self
            .entries
            .iter()
            .map(|&(code, _)| (code, hamming_distance(code, encoded)))
            .min_by_key(|&(code, distance)| (distance, code))?;
        (distance as usize <= max_corrections).then_some((code, distance))
    }

    /// Decode `encoded` to its value, correcting up to `max_corrections` bits
    pub fn decode(&self, encoded: u32, max_corrections: usize) -> Option<u32> {
        if let Some(value) = self.find(encoded) {
            return Some(value);
        }
        let (code, _) = self.correct(encoded, max_corrections)?;
        self.find(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: [(u32, u32); 3] = [(0b1111_0000, 1), (0b0000_1111, 2), (0b1100_1100, 3)];

    #[test]
    fn test_exact_match() {
        let table = LookupTable::new(&TABLE);
        assert_eq!(table.len(), 3);
        assert_eq!(table.find(0b0000_1111), Some(2));
        assert_eq!(table.decode(0b1100_1100, 0), Some(3));
        assert_eq!(table.find(0), None);
    }

    #[test]
    fn test_correction_bound() {
        let table = LookupTable::new(&TABLE);
        // one bit off entry 1
        assert_eq!(table.decode(0b1111_0001, 1), Some(1));
        assert_eq!(table.correct(0b1111_0001, 1), Some((0b1111_0000, 1)));
        // two bits off entry 2, outside a bound of 1
        assert_eq!(table.decode(0b0001_1110, 2), Some(2));
        assert_eq!(table.decode(0b0001_1110, 1), None);
    }

    #[test]
    fn test_tie_goes_to_smallest_codeword() {
        let table = LookupTable::new(&TABLE);
        // two bits from both 0b1111_0000 and 0b1100_1100
        assert_eq!(table.correct(0b1100_0000, 4), Some((0b1100_1100, 2)));
        // four bits from every entry
        assert_eq!(table.correct(0b0011_1100, 4), Some((0b0000_1111, 4)));
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0x5412, 0x5412), 0);
        assert_eq!(hamming_distance(0, 0x7FFF), 15);
    }
}
