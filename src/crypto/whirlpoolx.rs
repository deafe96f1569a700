//! WhirlpoolX: a 32-byte digest folded out of Whirlpool-512
//!
//! Legacy header hash. Not a standard construction; it must never change.

use whirlpool::{Digest, Whirlpool};

use super::Hash;

/// `out[i] = w[i] ^ w[i + 16]` over the 64-byte Whirlpool digest `w`.
pub fn whirlpoolx(data: &[u8]) -> Hash {
    let full = Whirlpool::digest(data);
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = full[i] ^ full[i + 16];
    }
    Hash(out)
}
