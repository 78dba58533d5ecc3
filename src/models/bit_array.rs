use crate::error::{DecodeError, Result};

/// Ordered sequence of bits, insertion order significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitArray {
    bits: Vec<bool>,
}

impl BitArray {
    /// Create an empty bit array
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bit array with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Build from `width` bits of `value`, least significant bit first
    pub fn from_number_lsb(value: u64, width: usize) -> Self {
        let mut out = Self::with_capacity(width);
        out.push_number_lsb(value, width);
        out
    }

    /// Build from `width` bits of `value`, most significant bit first
    pub fn from_number_msb(value: u64, width: usize) -> Self {
        let mut out = Self::with_capacity(width);
        out.push_number_msb(value, width);
        out
    }

    /// Build from bytes, each byte pushed most significant bit first
    pub fn from_bytes_msb(bytes: &[u8]) -> Self {
        let mut out = Self::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            out.push_number_msb(byte as u64, 8);
        }
        out
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits are stored
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append one bit
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `width` bits of `value`, bit 0 first
    pub fn push_number_lsb(&mut self, value: u64, width: usize) {
        for i in 0..width.min(64) {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append the low `width` bits of `value`, highest of them first
    pub fn push_number_msb(&mut self, value: u64, width: usize) {
        let width = width.min(64);
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append every bit of `other`
    pub fn append(&mut self, other: &BitArray) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Read bit `index`
    pub fn get(&self, index: usize) -> Result<bool> {
        self.bits
            .get(index)
            .copied()
            .ok_or(DecodeError::IndexOutOfBounds {
                index,
                len: self.bits.len(),
            })
    }

    /// Overwrite bit `index`
    pub fn set(&mut self, index: usize, bit: bool) -> Result<()> {
        let len = self.bits.len();
        match self.bits.get_mut(index) {
            Some(slot) => {
                *slot = bit;
                Ok(())
            }
            None => Err(DecodeError::IndexOutOfBounds { index, len }),
        }
    }

    /// Remove all bits
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Iterate over bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Borrow the bits as a slice
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Read up to `bits` bits from index 0, first bit least significant.
    ///
    /// Reads stop at the array end and at 64 bits.
    pub fn to_number_lsb(&self, bits: usize) -> u64 {
        self.bits
            .iter()
            .take(bits.min(64))
            .enumerate()
            .fold(0u64, |acc, (i, &bit)| acc | ((bit as u64) << i))
    }

    /// Read up to `bits` bits from index 0, first bit most significant.
    pub fn to_number_msb(&self, bits: usize) -> u64 {
        self.bits
            .iter()
            .take(bits.min(64))
            .fold(0u64, |acc, &bit| (acc << 1) | bit as u64)
    }

    /// Pack into bytes, eight bits per byte, first bit most significant.
    /// A trailing partial byte is zero-padded on the right.
    pub fn to_bytes_msb(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitArray {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}
