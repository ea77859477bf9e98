//! Fixed-width integer words used for leaf values and fragment indices
//!
//! A [`Word`] is a 256-bit unsigned integer stored as 32 big-endian bytes,
//! the canonical encoding consumed by [`crate::hash_leaf`]. During path
//! folding its bits are consumed least significant first, one per tree level.

use std::fmt::Display;

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;
use serde::{Deserialize, Serialize};

use crate::error::WordError;

/// A 256-bit unsigned integer in big-endian byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Word([u8; 32]);

impl Word {
    /// Byte width of a word.
    pub const BYTES: usize = 32;
    /// Bit width of a word.
    pub const BITS: usize = Self::BYTES * 8;
    /// The zero word. Used as the sentinel value for never-written leaves.
    pub const ZERO: Word = Word([0; Self::BYTES]);

    /// Decodes a word from a big-endian byte slice of exactly [`Word::BYTES`] bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, WordError> {
        if bytes.len() != Self::BYTES {
            return Err(WordError::InvalidLength {
                expected: Self::BYTES,
                got: bytes.len(),
            });
        }
        let mut word = [0; Self::BYTES];
        word.copy_from_slice(bytes);
        Ok(Self(word))
    }

    /// Decodes a word from a 64-character hex string, with or without a `0x` prefix.
    pub fn from_be_hex(s: &str) -> Result<Self, WordError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Self::from_be_slice(&hex::decode(s)?)
    }

    /// Returns the canonical big-endian encoding.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Get the bit at the given index in the word, `0` being the least significant.
    ///
    /// Indices at or beyond [`Word::BITS`] read as `0`.
    pub const fn bit(&self, index: usize) -> bool {
        if index >= Self::BITS {
            return false;
        }
        // the last byte holds the lowest bits, so walk from the end
        (self.0[Self::BYTES - 1 - index / 8] >> (index % 8)) & 1 == 1
    }

    /// Least-significant-bit-first view of the word, one bit per tree level.
    pub fn bits(&self) -> BitVec<u8, Lsb0> {
        let mut le = self.0;
        le.reverse();
        BitVec::from_slice(&le)
    }
}

impl From<u64> for Word {
    fn from(value: u64) -> Self {
        let mut word = [0; Self::BYTES];
        word[Self::BYTES - 8..].copy_from_slice(&value.to_be_bytes());
        Self(word)
    }
}

impl From<u128> for Word {
    fn from(value: u128) -> Self {
        let mut word = [0; Self::BYTES];
        word[Self::BYTES - 16..].copy_from_slice(&value.to_be_bytes());
        Self(word)
    }
}

impl From<[u8; 32]> for Word {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_slice()))
    }
}
