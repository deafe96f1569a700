//! Transaction structure and canonical encoding
//!
//! Transactions are value objects; their identity is `sha256d` of the
//! canonical byte layout, recomputed on every call.

use serde::{Deserialize, Serialize};
use crate::crypto::{sha256d, Hash};

/// Reference to an output of a previous transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction containing the output
    pub hash: Hash,
    /// Index of the output in that transaction
    pub index: u32,
}

impl OutPoint {
    pub fn new(hash: Hash, index: u32) -> Self {
        Self { hash, index }
    }

    /// The outpoint carried by a coinbase input
    pub fn null() -> Self {
        Self { hash: Hash::zero(), index: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.index == u32::MAX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_out: OutPoint,
    /// Unlocking script
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

impl TxIn {
    pub fn new(previous_out: OutPoint, script_sig: Vec<u8>) -> Self {
        Self {
            previous_out,
            script_sig,
            sequence: u32::MAX,
        }
    }
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in the smallest unit
    pub value: i64,
    /// Locking script
    pub script_pub_key: Vec<u8>,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: u32,
    /// Transaction inputs
    pub inputs: Vec<TxIn>,
    /// Transaction outputs
    pub outputs: Vec<TxOut>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a version 1 transaction with no lock time
    pub fn new(inputs: Vec<TxIn>, outputs: Vec<TxOut>) -> Self {
        Self {
            version: 1,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// Create a coinbase transaction paying `value` to `script_pub_key`
    pub fn coinbase(value: i64, coinbase_data: Vec<u8>, script_pub_key: Vec<u8>) -> Self {
        Self::new(
            vec![TxIn::new(OutPoint::null(), coinbase_data)],
            vec![TxOut { value, script_pub_key }],
        )
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_out.is_null()
    }

    /// Calculate transaction hash
    pub fn hash(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// Canonical byte layout, the input of `hash()`
    ///
    /// All integers little-endian; counts and script lengths are `u32`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        bytes.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            bytes.extend_from_slice(&input.previous_out.hash.0);
            bytes.extend_from_slice(&input.previous_out.index.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        bytes.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut bytes, &output.script_pub_key);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());

        bytes
    }
}

fn write_script(bytes: &mut Vec<u8>, script: &[u8]) {
    bytes.extend_from_slice(&(script.len() as u32).to_le_bytes());
    bytes.extend_from_slice(script);
}
