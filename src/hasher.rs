//! Hashing primitives for the proof oracle
//!
//! The oracle is hash-agnostic: everything is generic over the [`Hasher`]
//! trait so a verifier harness can plug in whatever collision-resistant
//! function its counterpart uses. [`Keccak256`] is the shipped default
//! since the reference verifier lives on an EVM chain; `sha2::Sha256`
//! implements the trait as well.
//!
//! Leaf and node hashing are domain separated by input width: a leaf hashes
//! exactly one 32-byte word, a node hashes exactly two concatenated digests.

use sha2::{Digest as _, Sha256};
use tiny_keccak::Hasher as _;
use tiny_keccak::Keccak;

use crate::word::Word;

/// A hash digest of `HASH_SIZE` bytes. Opaque, compared only for equality.
pub type Digest<const HASH_SIZE: usize> = [u8; HASH_SIZE];

/// Simple hash trait required to hash leaves and internal nodes
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Keccak-256, the hash the reference EVM verifier computes with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256;

impl Hasher<32> for Keccak256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        hasher.update(data);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }
}

/// Hashes a leaf value through its canonical big-endian encoding.
///
/// Total and pure: every [`Word`] is a valid leaf value and equal inputs
/// always produce equal digests.
pub fn hash_leaf<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(value: Word) -> Digest<HASH_SIZE> {
    H::hash(value.to_be_bytes().as_slice())
}

/// Hashes an ordered pair of child digests as `left || right`.
///
/// Order matters: the index bit during folding is what decides which side
/// the current node lands on, so `hash_node(a, b)` and `hash_node(b, a)`
/// must stay distinct.
pub fn hash_node<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    left: &Digest<HASH_SIZE>,
    right: &Digest<HASH_SIZE>,
) -> Digest<HASH_SIZE> {
    H::hash([left.as_slice(), right.as_slice()].concat().as_slice())
}
