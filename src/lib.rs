//! Sparse Merkle Tree proof oracle
//!
//! This crate is the deterministic reference for a Sparse Merkle Tree of
//! fragment slots: given a leaf value, a sibling path and a fragment index
//! it reproduces, bit for bit, the root a verifier's tree arithmetic must
//! arrive at. It never builds or stores a tree; callers extract the path,
//! the oracle only folds it.
//!
//! The crate provides:
//! - Domain-separated leaf and node hashing over a pluggable [`Hasher`]
//! - Pure leaf-to-root path folding driven by the index bits
//! - Proof builders for the pre-mint (empty) and post-mint leaf states

mod error;
mod fold;
mod hasher;
mod proof;
mod word;

pub use error::{ProofError, WordError};
pub use fold::compute_root;
pub use hasher::{hash_leaf, hash_node, Digest, Hasher, Keccak256};
pub use proof::{
    build_empty_proof, build_mint_proof, build_proof, ensure_depth, LeafPolicy, ProofOutput,
};
pub use word::Word;
