//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// If a level has an odd number of elements, the last one is duplicated.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let mut current_level: Vec<Hash> = hashes.to_vec();

    let Some(&first) = current_level.first() else {
        return Hash::zero();
    };
    if current_level.len() == 1 {
        return first;
    }

    while current_level.len() > 1 {
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        current_level = current_level
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    current_level[0]
}

/// Merkle branch for a single leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    /// Index of the leaf in the original list
    pub index: usize,
    /// Sibling hashes from leaf to root
    pub siblings: Vec<(Hash, bool)>, // (hash, is_left)
}

impl MerkleProof {
    /// Verify this proof against a root hash
    pub fn verify(&self, leaf: &Hash, root: &Hash) -> bool {
        let computed = self.siblings.iter().fold(*leaf, |current, (sibling, is_left)| {
            if *is_left {
                hash_pair(sibling, &current)
            } else {
                hash_pair(&current, sibling)
            }
        });

        computed == *root
    }
}

/// Build a merkle proof for the leaf at `index`
pub fn build_merkle_proof(hashes: &[Hash], index: usize) -> Option<MerkleProof> {
    if index >= hashes.len() {
        return None;
    }

    let mut current_level: Vec<Hash> = hashes.to_vec();
    let mut current_index = index;
    let mut siblings = Vec::new();

    while current_level.len() > 1 {
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        let sibling_index = current_index ^ 1;
        let is_left = current_index % 2 == 1;
        siblings.push((current_level[sibling_index], is_left));

        current_level = current_level
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
        current_index /= 2;
    }

    Some(MerkleProof { index, siblings })
}
