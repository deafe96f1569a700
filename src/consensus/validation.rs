//! Block structural validation
//!
//! Pure functions; a block must pass `validate_block` before anything
//! downstream trusts its contents.

use std::collections::HashSet;
use thiserror::Error;
use crate::consensus::Block;
use crate::crypto::Hash;

/// Validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Block has no transactions")]
    EmptyBlock,
    #[error("Merkle root mismatch: header {expected}, computed {computed}")]
    MerkleMismatch { expected: Hash, computed: Hash },
    #[error("Duplicate transaction {0}")]
    DuplicateTransaction(Hash),
}

/// Validate merkle root matches transactions
pub fn validate_merkle_root(block: &Block) -> Result<(), ValidationError> {
    let computed = block.build_merkle_root();

    if computed != block.header.merkle_root {
        return Err(ValidationError::MerkleMismatch {
            expected: block.header.merkle_root,
            computed,
        });
    }

    Ok(())
}

/// Reject the first transaction hash seen twice, scanning in block order
pub fn validate_unique_transactions(block: &Block) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(block.transactions.len());

    for tx in &block.transactions {
        let hash = tx.hash();
        if !seen.insert(hash) {
            return Err(ValidationError::DuplicateTransaction(hash));
        }
    }

    Ok(())
}

/// Validate a block's structure
pub fn validate_block(block: &Block) -> Result<(), ValidationError> {
    if block.transactions.is_empty() {
        return Err(ValidationError::EmptyBlock);
    }

    validate_merkle_root(block)?;
    validate_unique_transactions(block)?;

    Ok(())
}

impl Block {
    /// See [`validate_block`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_block(self)
    }
}
