//! SHA-256 based digests
//!
//! `sha256d` keys blocks and transactions, `hash160` shortens public keys
//! and scripts into address payloads.

use rand::RngCore;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for genesis previous hash and null outpoints)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Create hash from hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Hash(arr))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Byte-reversed copy, the order block explorers usually display
    pub fn reversed(&self) -> Self {
        let mut out = self.0;
        out.reverse();
        Hash(out)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 20-byte RIPEMD-160(SHA-256) digest
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash160(pub [u8; 20]);

impl Hash160 {
    /// Build from a slice, `None` unless it is exactly 20 bytes long
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 20] = bytes.try_into().ok()?;
        Some(Hash160(arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self.to_hex())
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Single SHA-256
pub fn sha256(data: &[u8]) -> Hash {
    Hash(Sha256::digest(data).into())
}

/// SHA-256 applied twice
pub fn sha256d(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    Hash(Sha256::digest(first).into())
}

/// Hash two hashes together (for Merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    sha256d(&data)
}

/// RIPEMD-160 of SHA-256
pub fn hash160(data: &[u8]) -> Hash160 {
    let inner = Sha256::digest(data);
    Hash160(Ripemd160::digest(inner).into())
}

/// First four bytes of `sha256d(data)` read as a little-endian word
pub fn sha256d_checksum(data: &[u8]) -> u32 {
    let sum = sha256d(data);
    u32::from_le_bytes([sum.0[0], sum.0[1], sum.0[2], sum.0[3]])
}

/// 32 bytes from the OS random source
pub fn random_hash() -> Hash {
    let mut out = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut out);
    Hash(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_vectors() {
        assert_eq!(
            sha256d(b"").to_hex(),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
        assert_eq!(
            sha256d(b"hello").to_hex(),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
        assert_eq!(
            sha256d(b"abc").to_hex(),
            "4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358"
        );
    }

    #[test]
    fn test_sha256d_is_sha256_twice() {
        let once = sha256(b"abc");
        assert_eq!(sha256(&once.0), sha256d(b"abc"));
    }

    #[test]
    fn test_hash160_vectors() {
        assert_eq!(hash160(b"").to_hex(), "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb");
        assert_eq!(hash160(b"hello").to_hex(), "b6a9c8c230722b7c748331a8b450f05566dc7d0f");
        assert_eq!(hash160(b"abc").to_hex(), "bb1be98c142444d7a56aa3981c3942a978e4dc33");
    }

    #[test]
    fn test_checksum_is_little_endian_prefix() {
        // sha256d("") starts 5d f6 e0 e2
        assert_eq!(sha256d_checksum(b""), 0xe2e0f65d);
    }

    #[test]
    fn test_zero_hash() {
        let zero = Hash::zero();
        assert_eq!(zero.0, [0u8; 32]);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_hex_roundtrip() {
        let hash = sha256d(b"test");
        let recovered = Hash::from_hex(&hash.to_hex()).unwrap();
        assert_eq!(hash, recovered);
        assert!(Hash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_reversed() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        let reversed = Hash(bytes).reversed();
        assert_eq!(reversed.0[31], 1);
        assert_eq!(reversed.reversed(), Hash(bytes));
    }

    #[test]
    fn test_hash_pair_order_matters() {
        let left = sha256d(b"left");
        let right = sha256d(b"right");
        assert_eq!(hash_pair(&left, &right), hash_pair(&left, &right));
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }

    #[test]
    fn test_hash160_from_slice() {
        assert!(Hash160::from_slice(&[0u8; 20]).is_some());
        assert!(Hash160::from_slice(&[0u8; 19]).is_none());
        assert!(Hash160::from_slice(&[0u8; 21]).is_none());
    }

    #[test]
    fn test_random_hash_differs() {
        assert_ne!(random_hash(), random_hash());
    }
}
