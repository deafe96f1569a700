//! Base58Check codec
//!
//! `base58(version || payload || checksum)` where checksum is the first four
//! bytes of `sha256d(version || payload)`. Uses the Bitcoin alphabet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use crate::crypto::sha256d;

const CHECKSUM_LEN: usize = 4;

/// Base58Check decoding errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base58Error {
    #[error("Invalid base58 encoding")]
    InvalidEncoding,
    #[error("Checksum mismatch")]
    ChecksumMismatch,
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest.0[..CHECKSUM_LEN]);
    out
}

/// Encode `version || payload` with a trailing checksum
pub fn encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string into `(version, payload)`
pub fn decode(encoded: &str) -> Result<(u8, Vec<u8>), Base58Error> {
    let decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| Base58Error::InvalidEncoding)?;

    if decoded.len() < CHECKSUM_LEN {
        return Err(Base58Error::InvalidEncoding);
    }

    let (data, sum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if sum != checksum(data) {
        return Err(Base58Error::ChecksumMismatch);
    }

    // a valid checksum over nothing still lacks the version byte
    let (&version, payload) = data.split_first().ok_or(Base58Error::InvalidEncoding)?;
    Ok((version, payload.to_vec()))
}

/// A versioned payload
///
/// Ordering is by version, then payload bytes, shorter payload first when
/// one is a prefix of the other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Base58Value {
    version: u8,
    payload: Vec<u8>,
}

impl Base58Value {
    pub fn new(version: u8, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            version,
            payload: payload.into(),
        }
    }

    /// Replace version and payload together
    pub fn set(&mut self, version: u8, payload: impl Into<Vec<u8>>) {
        *self = Self::new(version, payload);
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl fmt::Display for Base58Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.version, &self.payload))
    }
}

impl FromStr for Base58Value {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, payload) = decode(s)?;
        Ok(Self { version, payload })
    }
}
