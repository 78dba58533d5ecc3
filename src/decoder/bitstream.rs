//! Sequential bit readers over a [`BitArray`]
//!
//! The read order is a type parameter:
//! - [`LsbFirst`]: the first bit read lands in bit 0 of the result
//! - [`MsbFirst`]: each new bit is shifted in from the right, so the first
//!   bit read ends up most significant (codeword order)
//!
//! Every stream keeps its own position, so several streams can walk the same
//! array independently.

use std::marker::PhantomData;

use crate::models::BitArray;

/// How successive bits are folded into a number
pub trait BitOrder {
    /// Fold `bit`, the `index`-th bit of the current read, into `acc`
    fn accumulate(acc: u64, bit: bool, index: usize) -> u64;
}

/// First bit read is least significant
#[derive(Debug, Clone, Copy, Default)]
pub struct LsbFirst;

/// First bit read is most significant
#[derive(Debug, Clone, Copy, Default)]
pub struct MsbFirst;

impl BitOrder for LsbFirst {
    fn accumulate(acc: u64, bit: bool, index: usize) -> u64 {
        acc | ((bit as u64) << index)
    }
}

impl BitOrder for MsbFirst {
    fn accumulate(acc: u64, bit: bool, _index: usize) -> u64 {
        (acc << 1) | bit as u64
    }
}

/// Reader over a borrowed bit array
#[derive(Debug, Clone)]
pub struct BitStream<'a, O: BitOrder> {
    bits: &'a BitArray,
    position: usize,
    width: usize,
    last_read_bits: usize,
    _order: PhantomData<O>,
}

/// Low-bit-first stream
pub type LsbStream<'a> = BitStream<'a, LsbFirst>;
/// High-bit-first stream
pub type MsbStream<'a> = BitStream<'a, MsbFirst>;

impl<'a, O: BitOrder> BitStream<'a, O> {
    /// Width used until the first call to [`BitStream::stream`]
    pub const DEFAULT_WIDTH: usize = 8;

    /// Stream positioned at the first bit
    pub fn new(bits: &'a BitArray) -> Self {
        Self {
            bits,
            position: 0,
            width: Self::DEFAULT_WIDTH,
            last_read_bits: 0,
            _order: PhantomData,
        }
    }

    /// Set the width of subsequent reads, clamped to 64
    pub fn stream(&mut self, width: usize) -> &mut Self {
        self.width = width.min(64);
        self
    }

    /// Read the configured number of bits.
    ///
    /// Near the end only the remaining bits are read; [`BitStream::last_read_bits`]
    /// reports how many were actually consumed.
    pub fn read(&mut self) -> u64 {
        let slice = self.bits.as_slice();
        let end = (self.position + self.width).min(slice.len());
        let value = slice[self.position..end]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &bit)| O::accumulate(acc, bit, i));
        self.last_read_bits = end - self.position;
        self.position = end;
        value
    }

    /// Set the width and read in one step
    pub fn read_bits(&mut self, width: usize) -> u64 {
        self.stream(width).read()
    }

    /// Bits consumed by the most recent read
    pub fn last_read_bits(&self) -> usize {
        self.last_read_bits
    }

    /// Current width
    pub fn width(&self) -> usize {
        self.width
    }

    /// True once every bit has been consumed
    pub fn is_end(&self) -> bool {
        self.position >= self.bits.len()
    }

    /// Index of the next bit to read
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.bits.len().saturating_sub(self.position)
    }

    /// Rewind to the start
    pub fn reset(&mut self) {
        self.position = 0;
        self.last_read_bits = 0;
    }
}
