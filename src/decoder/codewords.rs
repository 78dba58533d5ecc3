//! Codeword organization: deinterleave, correct, reassemble
//!
//! Codewords are stored round-robin across blocks: first the data codewords
//! of every block, then their error correction codewords. Blocks of the
//! second (longer) group take the extra data codeword at the end of the data
//! rounds.

use log::{debug, trace, warn};

use crate::decoder::bitstream::MsbStream;
use crate::decoder::galois::Galois;
use crate::decoder::reed_solomon::{RsDecoder, RsError};
use crate::decoder::tables::{BlockCharacteristic, block_characteristics};
use crate::error::{DecodeError, Result};
use crate::models::{BitArray, ECLevel, SegmentsFlags, Version};

/// One error correction block: `k` data codewords followed by `c - k` parity codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Layout of the group this block belongs to
    pub characteristic: BlockCharacteristic,
    /// Codewords, data first
    pub codewords: Vec<u8>,
}

impl Block {
    fn new(characteristic: BlockCharacteristic) -> Self {
        Self {
            characteristic,
            codewords: Vec::with_capacity(characteristic.c),
        }
    }

    /// Data codewords of the block
    pub fn data(&self) -> &[u8] {
        let k = self.characteristic.k.min(self.codewords.len());
        &self.codewords[..k]
    }
}

/// Splits sampled codeword bits into blocks and runs Reed-Solomon on each
#[derive(Debug, Clone, Copy)]
pub struct CodewordOrganizer<'g> {
    gf: &'g Galois,
    enforce_capacity: bool,
}

impl<'g> CodewordOrganizer<'g> {
    /// Organizer over `gf`; with `enforce_capacity` a block needing more than
    /// `r` corrections counts as uncorrectable
    pub fn new(gf: &'g Galois, enforce_capacity: bool) -> Self {
        Self {
            gf,
            enforce_capacity,
        }
    }

    /// Deinterleave `bits` into the blocks of `version` at `ec_level`.
    ///
    /// Only the first `total codewords * 8` bits are used; remainder bits are ignored.
    pub fn extract_blocks(
        bits: &BitArray,
        version: Version,
        ec_level: ECLevel,
    ) -> Result<Vec<Block>> {
        let groups = block_characteristics(version, ec_level);
        let codeword_bits = version.codeword_bits();
        let total: usize = groups.iter().map(|g| g.blocks * g.c).sum();
        let needed = total * codeword_bits;
        if bits.len() < needed {
            return Err(DecodeError::TruncatedCodewords {
                needed,
                available: bits.len(),
            });
        }

        let mut blocks: Vec<Block> = groups
            .iter()
            .flat_map(|g| std::iter::repeat_n(*g, g.blocks))
            .map(Block::new)
            .collect();
        let mut stream = MsbStream::new(bits);
        stream.stream(codeword_bits);

        Self::interleave(&mut blocks, groups, |g| g.k, &mut stream);
        Self::interleave(&mut blocks, groups, |g| g.parity(), &mut stream);
        Ok(blocks)
    }

    /// One round-robin pass; the round index carries on across groups, so a
    /// finished group drops out and the remaining blocks keep taking codewords
    fn interleave(
        blocks: &mut [Block],
        groups: &[BlockCharacteristic],
        count: impl Fn(&BlockCharacteristic) -> usize,
        stream: &mut MsbStream<'_>,
    ) {
        let mut round = 0;
        let mut first = 0;
        for group in groups {
            while round < count(group) {
                for block in &mut blocks[first..] {
                    block.codewords.push(stream.read() as u8);
                }
                round += 1;
            }
            first += group.blocks;
        }
    }

    /// Correct every block in place; returns `false` when any block failed.
    ///
    /// A failed block keeps its received codewords.
    pub fn correct_blocks(&self, blocks: &mut [Block]) -> Result<bool> {
        let mut all_ok = true;
        for (index, block) in blocks.iter_mut().enumerate() {
            let decoder = RsDecoder::new(self.gf, block.characteristic.parity())?;
            let mut work = block.codewords.clone();
            let outcome = decoder.decode(&mut work, false).and_then(|fixed| {
                if self.enforce_capacity && fixed > block.characteristic.r {
                    Err(RsError::Uncorrectable)
                } else {
                    Ok(fixed)
                }
            });
            match outcome {
                Ok(fixed) => {
                    trace!("block {index}: {fixed} codewords corrected");
                    block.codewords = work;
                }
                Err(RsError::Uncorrectable) => {
                    warn!(
                        "block {index}: uncorrectable ({} codewords, capacity {})",
                        block.characteristic.c, block.characteristic.r
                    );
                    all_ok = false;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(all_ok)
    }

    /// Data codewords of all blocks in block order, high bit first
    pub fn data_bits(blocks: &[Block]) -> BitArray {
        let bytes: Vec<u8> = blocks.iter().flat_map(|b| b.data().iter().copied()).collect();
        BitArray::from_bytes_msb(&bytes)
    }

    /// Full pass: deinterleave, correct and reassemble the data bit stream.
    ///
    /// Uncorrectable blocks raise [`SegmentsFlags::CORRUPTED`] instead of failing.
    pub fn organize(
        &self,
        bits: &BitArray,
        version: Version,
        ec_level: ECLevel,
    ) -> Result<(BitArray, SegmentsFlags)> {
        let mut blocks = Self::extract_blocks(bits, version, ec_level)?;
        let mut flags = SegmentsFlags::empty();
        if !self.correct_blocks(&mut blocks)? {
            flags |= SegmentsFlags::CORRUPTED;
        }
        let data = Self::data_bits(&blocks);
        debug!(
            "codewords: {} blocks, {} data bits, flags {flags:?}",
            blocks.len(),
            data.len()
        );
        Ok((data, flags))
    }
}
