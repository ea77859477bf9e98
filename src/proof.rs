//! Proof builders for the two leaf states a fragment slot can be in.
//!
//! A fragment slot is either untouched (its leaf hashes the zero-word
//! sentinel) or minted (its leaf hashes the fragment's own index, the
//! scheme's value-equals-identity convention). Both constructions fold the
//! same sibling path with the fragment id as the index, so a verifier's
//! pre-mint and post-mint roots can be cross-checked from one extracted
//! path.

use serde::{Deserialize, Serialize};

use crate::error::ProofError;
use crate::fold::compute_root;
use crate::hasher::{hash_leaf, Digest, Hasher};
use crate::word::Word;

/// How the leaf value is derived from the fragment index.
///
/// The value-equals-index rule is a scheme convention, not a property of the
/// tree; spelling it out as a policy keeps the folder reusable under other
/// leaf encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafPolicy {
    /// The slot has never been written; the leaf hashes the zero word.
    Empty,
    /// The leaf value equals the fragment index (the mint convention).
    ValueEqualsIndex,
}

impl LeafPolicy {
    /// Leaf value for `fragment_id` under this policy.
    pub fn leaf_value(&self, fragment_id: Word) -> Word {
        match self {
            Self::Empty => Word::ZERO,
            Self::ValueEqualsIndex => fragment_id,
        }
    }
}

/// The `(leaf, root)` pair a proof construction produces.
///
/// Carries no path data: the path is an input, and the whole point of the
/// pair is equality against a verifier's claimed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "[u8; HASH_SIZE]: Serialize",
    deserialize = "[u8; HASH_SIZE]: Deserialize<'de>"
))]
pub struct ProofOutput<const HASH_SIZE: usize> {
    /// Digest of the constructed leaf.
    pub leaf: Digest<HASH_SIZE>,
    /// Digest obtained after folding the full sibling path.
    pub root: Digest<HASH_SIZE>,
}

impl<const HASH_SIZE: usize> ProofOutput<HASH_SIZE> {
    /// Checks this output against a verifier's claimed `(leaf, root)` pair.
    pub fn matches(&self, leaf: &Digest<HASH_SIZE>, root: &Digest<HASH_SIZE>) -> bool {
        self.leaf == *leaf && self.root == *root
    }
}

/// Builds the leaf under `policy` and folds it through `path` with
/// `fragment_id` as the index.
pub fn build_proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    policy: LeafPolicy,
    fragment_id: Word,
    path: &[Digest<HASH_SIZE>],
) -> ProofOutput<HASH_SIZE> {
    let leaf = hash_leaf::<HASH_SIZE, H>(policy.leaf_value(fragment_id));
    let root = compute_root::<HASH_SIZE, H>(leaf, path, fragment_id);
    ProofOutput { leaf, root }
}

/// Proof for a fragment slot that has never been written.
pub fn build_empty_proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    fragment_id: Word,
    path: &[Digest<HASH_SIZE>],
) -> ProofOutput<HASH_SIZE> {
    build_proof::<HASH_SIZE, H>(LeafPolicy::Empty, fragment_id, path)
}

/// Proof for a fragment slot right after its mint transition.
pub fn build_mint_proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    fragment_id: Word,
    path: &[Digest<HASH_SIZE>],
) -> ProofOutput<HASH_SIZE> {
    build_proof::<HASH_SIZE, H>(LeafPolicy::ValueEqualsIndex, fragment_id, path)
}

/// Asserts that `path` has exactly `expected` siblings.
///
/// Opt-in boundary check for callers that want a mismatched extraction to
/// fail fast instead of producing a non-matching root. The folder itself
/// never calls this; folding semantics are unchanged either way.
pub fn ensure_depth<const HASH_SIZE: usize>(
    path: &[Digest<HASH_SIZE>],
    expected: usize,
) -> Result<(), ProofError> {
    if path.len() != expected {
        return Err(ProofError::DepthMismatch {
            expected,
            got: path.len(),
        });
    }
    Ok(())
}
