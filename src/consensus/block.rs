//! Block structure for the Pila blockchain
//!
//! Defines the block header, its fixed 80-byte layout and the
//! version-gated header hash.

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::constants::MODERN_HEADER_VERSION;
use crate::crypto::{blake256_8round, compute_merkle_root, whirlpoolx, Hash};
use crate::validation::Transaction;

/// Serialized header size in bytes
pub const HEADER_SIZE: usize = 80;

/// Header decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("Invalid header length: expected 80 bytes, got {0}")]
    InvalidLength(usize),
}

/// Digest used for a header, selected by its version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// WhirlpoolX, headers below `MODERN_HEADER_VERSION`
    Legacy,
    /// 8-round BLAKE-256
    Modern,
}

impl HashAlgorithm {
    /// Pick the algorithm a header of `version` was minted under.
    ///
    /// Stored headers keep their original algorithm forever.
    pub fn for_version(version: u32) -> Self {
        if version < MODERN_HEADER_VERSION {
            HashAlgorithm::Legacy
        } else {
            HashAlgorithm::Modern
        }
    }

    pub fn digest(self, data: &[u8]) -> Hash {
        match self {
            HashAlgorithm::Legacy => whirlpoolx(data),
            HashAlgorithm::Modern => blake256_8round(data),
        }
    }
}

/// Block header containing all metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: u32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub timestamp: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(
        version: u32,
        prev_hash: Hash,
        merkle_root: Hash,
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.timestamp.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Parse the fixed 80-byte layout
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() != HEADER_SIZE {
            return Err(HeaderError::InvalidLength(bytes.len()));
        }

        let word = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let digest = |at: usize| {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(&bytes[at..at + 32]);
            Hash(arr)
        };

        Ok(Self {
            version: word(0),
            prev_hash: digest(4),
            merkle_root: digest(36),
            timestamp: word(68),
            bits: word(72),
            nonce: word(76),
        })
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::for_version(self.version)
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash {
        let algorithm = self.hash_algorithm();
        trace!("hashing header version {} with {:?}", self.version, algorithm);
        algorithm.digest(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    /// Create a block whose header commits to `transactions`
    pub fn with_merkle_root(mut header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        header.merkle_root = merkle_root(&transactions);
        Self { header, transactions }
    }

    /// Get the block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root of the transactions currently in the block
    pub fn build_merkle_root(&self) -> Hash {
        merkle_root(&self.transactions)
    }
}

/// Merkle root over transaction hashes, zero for an empty list
pub fn merkle_root(transactions: &[Transaction]) -> Hash {
    let tx_hashes: Vec<Hash> = transactions.iter().map(|tx| tx.hash()).collect();
    compute_merkle_root(&tx_hashes)
}
