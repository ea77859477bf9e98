//! Example of running the proof oracle with a custom hasher
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Building mint proofs with it
//! - Comparing the result against the stock Keccak-256 backend

use smt_oracle::{build_mint_proof, Hasher, Keccak256, Word};
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to the input
struct PrefixedSha256;

impl Hasher<32> for PrefixedSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Add a custom prefix to the input
        hasher.update(b"custom_prefix:");
        hasher.update(data);
        hasher.finalize().into()
    }
}

fn main() {
    let fragment_id = Word::from(42_u64);
    let path = [[0x11; 32], [0x22; 32], [0x33; 32]];

    // Build a mint proof with our custom hasher
    let custom = build_mint_proof::<32, PrefixedSha256>(fragment_id, &path);
    println!("Leaf with custom hasher: {}", hex::encode(custom.leaf));
    println!("Root with custom hasher: {}", hex::encode(custom.root));

    // Compare with the stock Keccak-256 backend
    let stock = build_mint_proof::<32, Keccak256>(fragment_id, &path);
    println!("Leaf with Keccak-256:    {}", hex::encode(stock.leaf));
    println!("Root with Keccak-256:    {}", hex::encode(stock.root));

    // Note that the digests are different due to our custom prefix
    println!("\nThe digests differ because the oracle is generic over the hasher.");
}
