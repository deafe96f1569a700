//! Cryptography module - digests, header hash functions, Merkle trees

mod blake;
mod hash;
mod merkle;
mod murmur;
mod whirlpoolx;

pub use blake::*;
pub use hash::*;
pub use merkle::*;
pub use murmur::*;
pub use whirlpoolx::*;
