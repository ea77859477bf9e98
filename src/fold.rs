//! Path folding from a leaf digest up to the root
//!
//! The folder walks a caller-supplied sibling path from the leaf's own depth
//! towards the root, consuming one bit of the fragment index per level. It
//! never builds or stores a tree: the path is the tree, as far as the oracle
//! is concerned.

use crate::hasher::{hash_node, Digest, Hasher};
use crate::word::Word;

/// Folds `leaf` through `path` into the root digest.
///
/// * `leaf` - digest at the bottom of the path.
/// * `path` - ordered siblings, `path[0]` at the leaf's own depth.
/// * `index` - position of the leaf; bit `i` (least significant first)
///   decides the child order at depth `i`. `1` puts the current node on the
///   right, `0` on the left. Bits beyond `path.len()` are never inspected.
///
/// An empty path returns `leaf` unchanged (a depth-0 tree is its own root).
/// The folder performs no depth validation: a path of the wrong length folds
/// fine and yields a root that simply won't match the verifier's. Use
/// [`crate::ensure_depth`] at the boundary if fail-fast behavior is wanted.
pub fn compute_root<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    leaf: Digest<HASH_SIZE>,
    path: &[Digest<HASH_SIZE>],
    index: Word,
) -> Digest<HASH_SIZE> {
    let bits = index.bits();
    let mut node = leaf;
    for (depth, sibling) in path.iter().enumerate() {
        // order the children based on the index bit at this depth
        node = if bits.get(depth).is_some_and(|bit| *bit) {
            hash_node::<HASH_SIZE, H>(sibling, &node)
        } else {
            hash_node::<HASH_SIZE, H>(&node, sibling)
        };
    }
    node
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::compute_root;
    use crate::hasher::{hash_leaf, hash_node, Keccak256};
    use crate::word::Word;

    #[test]
    fn test_empty_path_returns_leaf() {
        let leaf = hash_leaf::<32, Keccak256>(Word::from(42_u64));
        assert_eq!(compute_root::<32, Keccak256>(leaf, &[], Word::ZERO), leaf);
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &[], Word::from(u64::MAX)),
            leaf
        );
    }

    #[test]
    fn test_index_zero_folds_left() {
        let leaf = hash_leaf::<32, Keccak256>(Word::ZERO);
        let s0 = [0x11; 32];
        let s1 = [0x22; 32];
        let expected = hash_node::<32, Keccak256>(&hash_node::<32, Keccak256>(&leaf, &s0), &s1);
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &[s0, s1], Word::ZERO),
            expected
        );
        assert_eq!(
            expected,
            hex!("4673efe2c9508659a2968e74e3f080cd42a568eb6256b01063b2d9d71d8e33ee")
        );
    }

    #[test]
    fn test_index_one_single_sibling_folds_right() {
        let leaf = hash_leaf::<32, Keccak256>(Word::ZERO);
        let s0 = [0x11; 32];
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &[s0], Word::from(1_u64)),
            hash_node::<32, Keccak256>(&s0, &leaf)
        );
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &[s0], Word::from(1_u64)),
            hex!("2d65c0afe954b97bd74ccf080fcd23b7cc85858b3c3bd3bd136d3f812c427c03")
        );
    }

    #[test]
    fn test_index_two_fold_sequence() {
        // index 2 = binary 10: depth 0 folds left, depth 1 folds right
        let leaf = hash_leaf::<32, Keccak256>(Word::ZERO);
        let d1 = [0x11; 32];
        let d2 = [0x22; 32];
        let step1 = hash_node::<32, Keccak256>(&leaf, &d1);
        assert_eq!(
            step1,
            hex!("7d0dd18585aabcd929f529da1b9a61afc6ed7a5ec56ae9efe52920444472dd87")
        );
        let root = hash_node::<32, Keccak256>(&d2, &step1);
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &[d1, d2], Word::from(2_u64)),
            root
        );
        assert_eq!(
            root,
            hex!("97eaafd6b8b06dbaca0e15b90fb607810b6a09f37ccbe6c0884d8eb4c57ec744")
        );
    }

    #[test]
    fn test_high_index_bits_are_ignored() {
        let leaf = hash_leaf::<32, Keccak256>(Word::ZERO);
        let path = [[0x11; 32], [0x22; 32]];
        // indices agreeing on the low 2 bits fold identically
        let root = compute_root::<32, Keccak256>(leaf, &path, Word::from(0b10_u64));
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &path, Word::from(0b111111110_u64)),
            root
        );
        assert_eq!(
            compute_root::<32, Keccak256>(leaf, &path, Word::from(u64::MAX - 1)),
            root
        );
    }

    #[test]
    fn test_sibling_value_never_decides_order() {
        // identical sibling digests still fold by index bit, left vs right
        let leaf = hash_leaf::<32, Keccak256>(Word::from(3_u64));
        let s = [0x33; 32];
        let left = compute_root::<32, Keccak256>(leaf, &[s], Word::ZERO);
        let right = compute_root::<32, Keccak256>(leaf, &[s], Word::from(1_u64));
        assert_ne!(left, right);
    }
}
