//! Block persistence using Sled
//!
//! Blocks live under `"block:" + hex(header hash)`; values are the bincode
//! encoding of the whole block. Every block is validated on the way in and
//! on the way out.

use log::debug;
use sled::Db;
use std::path::Path;
use thiserror::Error;
use crate::consensus::{Block, ValidationError};
use crate::crypto::Hash;

/// Key prefix of stored blocks
pub const BLOCK_KEY_PREFIX: &str = "block:";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Key not found: {0}")]
    NotFound(String),
    #[error("Malformed stored value: {0}")]
    Decode(#[source] bincode::Error),
    #[error("Failed to encode value: {0}")]
    Encode(#[source] bincode::Error),
    #[error("Invalid block: {0}")]
    Invalid(#[from] ValidationError),
    #[error("Block under {key} hashes to {actual}")]
    HashMismatch { key: String, actual: Hash },
    #[error("Database error: {0}")]
    Db(#[from] sled::Error),
}

/// Storage key of a block with the given header hash
pub fn block_key(hash: &Hash) -> String {
    format!("{}{}", BLOCK_KEY_PREFIX, hash.to_hex())
}

/// Ordered key/value store holding blocks
#[derive(Debug, Clone)]
pub struct BlockStore {
    db: Db,
}

impl BlockStore {
    /// Open or create the database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// In-memory database removed on drop
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Store raw bytes under `key`
    pub fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.db.insert(key.as_bytes(), value)?;
        Ok(())
    }

    /// Raw bytes stored under `key`
    pub fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(bytes.to_vec()),
            None => Err(StorageError::NotFound(key.to_string())),
        }
    }

    /// Validate and store a block keyed by its header hash
    pub fn put_block(&self, block: &Block) -> Result<Hash, StorageError> {
        block.validate()?;

        let hash = block.hash();
        let value = bincode::serialize(block).map_err(StorageError::Encode)?;
        self.put(&block_key(&hash), &value)?;
        self.db.flush()?;

        debug!("stored block {} ({} transactions)", hash, block.transactions.len());
        Ok(hash)
    }

    /// Load and re-validate the block with header hash `hash_hex`
    pub fn get_block(&self, hash_hex: &str) -> Result<Block, StorageError> {
        let key = format!("{}{}", BLOCK_KEY_PREFIX, hash_hex);
        let bytes = self.get(&key)?;
        let block = decode_block(&key, &bytes)?;
        debug!("loaded block {}", hash_hex);
        Ok(block)
    }

    /// Every stored block in key order
    ///
    /// The first undecodable, invalid or misfiled entry aborts the listing.
    pub fn list_blocks(&self) -> Result<Vec<Block>, StorageError> {
        let mut blocks = Vec::new();

        for item in self.db.scan_prefix(BLOCK_KEY_PREFIX.as_bytes()) {
            let (key, value) = item?;
            let key = String::from_utf8_lossy(&key);
            blocks.push(decode_block(&key, &value)?);
        }

        Ok(blocks)
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

/// Decode, validate and check that `key` names the block's own hash
fn decode_block(key: &str, bytes: &[u8]) -> Result<Block, StorageError> {
    let block: Block = bincode::deserialize(bytes).map_err(StorageError::Decode)?;
    block.validate()?;

    let actual = block.hash();
    if block_key(&actual) != key {
        return Err(StorageError::HashMismatch {
            key: key.to_string(),
            actual,
        });
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::BlockHeader;
    use crate::validation::{Transaction, TxOut};

    fn block(version: u32, value: i64) -> Block {
        let tx = Transaction::new(vec![], vec![TxOut { value, script_pub_key: vec![] }]);
        let header =
            BlockHeader::new(version, Hash::zero(), Hash::zero(), 1419310800, 0x1e0fffff, 0);
        Block::with_merkle_root(header, vec![tx])
    }

    #[test]
    fn test_raw_put_get() {
        let store = BlockStore::temporary().unwrap();
        store.put("meta:tip", b"abc").unwrap();
        assert_eq!(store.get("meta:tip").unwrap(), b"abc");
    }

    #[test]
    fn test_missing_key() {
        let store = BlockStore::temporary().unwrap();
        assert!(matches!(store.get("nope"), Err(StorageError::NotFound(k)) if k == "nope"));
    }

    #[test]
    fn test_block_key_format() {
        let hash = Hash([0xab; 32]);
        assert_eq!(block_key(&hash), format!("block:{}", "ab".repeat(32)));
    }

    #[test]
    fn test_block_roundtrip() {
        let store = BlockStore::temporary().unwrap();
        let original = block(5, 10);
        let hash = store.put_block(&original).unwrap();
        assert_eq!(hash, original.hash());
        assert_eq!(store.get_block(&hash.to_hex()).unwrap(), original);
    }

    #[test]
    fn test_invalid_block_not_stored() {
        let store = BlockStore::temporary().unwrap();
        let mut bad = block(5, 10);
        bad.header.merkle_root = Hash::zero();
        assert!(matches!(
            store.put_block(&bad),
            Err(StorageError::Invalid(ValidationError::MerkleMismatch { .. }))
        ));
        assert!(store.list_blocks().unwrap().is_empty());
    }

    #[test]
    fn test_garbage_value_is_decode_error() {
        let store = BlockStore::temporary().unwrap();
        store.put("block:deadbeef", &[0xff, 0x01]).unwrap();
        assert!(matches!(store.get_block("deadbeef"), Err(StorageError::Decode(_))));
    }

    #[test]
    fn test_misfiled_block() {
        let store = BlockStore::temporary().unwrap();
        let stored = block(5, 10);
        let key = block_key(&Hash([0x42; 32]));
        store.put(&key, &bincode::serialize(&stored).unwrap()).unwrap();

        assert!(matches!(
            store.get_block(&"42".repeat(32)),
            Err(StorageError::HashMismatch { key: k, actual })
                if k == key && actual == stored.hash()
        ));
        assert!(matches!(store.list_blocks(), Err(StorageError::HashMismatch { .. })));
    }
}
