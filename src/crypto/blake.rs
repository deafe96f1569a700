//! BLAKE-256 reduced to 8 rounds
//!
//! Modern header hash. Padding, counter handling and the message schedule
//! follow the BLAKE-256 reference; only the round count differs (8 instead
//! of 14). Salt is always zero.

use super::Hash;

const ROUNDS: usize = 8;

const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// First digits of pi
const C: [u32; 16] = [
    0x243f6a88, 0x85a308d3, 0x13198a2e, 0x03707344, 0xa4093822, 0x299f31d0, 0x082efa98, 0xec4e6c89,
    0x452821e6, 0x38d01377, 0xbe5466cf, 0x34e90c6c, 0xc0ac29b7, 0xc97c50dd, 0x3f84d5b5, 0xb5470917,
];

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

const SALT: [u32; 4] = [0; 4];

const BLOCK_LEN: usize = 64;

/// Byte offset of the length field inside the final block
const LENGTH_OFFSET: usize = 56;

/// Quarter round on columns/diagonals of the 4x4 state
#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g(
    v: &mut [u32; 16],
    m: &[u32; 16],
    sigma: &[usize; 16],
    i: usize,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) {
    let (x, y) = (sigma[2 * i], sigma[2 * i + 1]);

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ C[y]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ C[x]);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

/// Compress one 64-byte block into the chaining value.
///
/// `counter` is the number of message bits hashed so far including this
/// block, or zero for a block holding padding only.
fn compress(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], counter: u64) {
    let mut m = [0u32; 16];
    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let t0 = counter as u32;
    let t1 = (counter >> 32) as u32;

    let mut v = [0u32; 16];
    v[..8].copy_from_slice(h);
    v[8] = SALT[0] ^ C[0];
    v[9] = SALT[1] ^ C[1];
    v[10] = SALT[2] ^ C[2];
    v[11] = SALT[3] ^ C[3];
    v[12] = t0 ^ C[4];
    v[13] = t0 ^ C[5];
    v[14] = t1 ^ C[6];
    v[15] = t1 ^ C[7];

    for round in 0..ROUNDS {
        let sigma = &SIGMA[round % 10];
        g(&mut v, &m, sigma, 0, 0, 4, 8, 12);
        g(&mut v, &m, sigma, 1, 1, 5, 9, 13);
        g(&mut v, &m, sigma, 2, 2, 6, 10, 14);
        g(&mut v, &m, sigma, 3, 3, 7, 11, 15);
        g(&mut v, &m, sigma, 4, 0, 5, 10, 15);
        g(&mut v, &m, sigma, 5, 1, 6, 11, 12);
        g(&mut v, &m, sigma, 6, 2, 7, 8, 13);
        g(&mut v, &m, sigma, 7, 3, 4, 9, 14);
    }

    for i in 0..8 {
        h[i] ^= SALT[i % 4] ^ v[i] ^ v[i + 8];
    }
}

/// BLAKE-256 with 8 rounds.
pub fn blake256_8round(data: &[u8]) -> Hash {
    let mut h = IV;
    let bit_len = (data.len() as u64).wrapping_mul(8);

    let mut chunks = data.chunks_exact(BLOCK_LEN);
    let mut counter: u64 = 0;
    for chunk in &mut chunks {
        counter = counter.wrapping_add(512);
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        compress(&mut h, &block, counter);
    }

    let rest = chunks.remainder();
    let mut block = [0u8; BLOCK_LEN];
    block[..rest.len()].copy_from_slice(rest);
    block[rest.len()] = 0x80;

    if rest.len() < LENGTH_OFFSET {
        // Padding, the trailing one bit and the length fit in this block.
        block[LENGTH_OFFSET - 1] |= 0x01;
        block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        let counter = if rest.is_empty() { 0 } else { bit_len };
        compress(&mut h, &block, counter);
    } else {
        compress(&mut h, &block, bit_len);

        let mut last = [0u8; BLOCK_LEN];
        last[LENGTH_OFFSET - 1] = 0x01;
        last[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut h, &last, 0);
    }

    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(h.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    Hash(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(data: &[u8]) -> String {
        blake256_8round(data).to_hex()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hex(b""), "5aca53d736759ea025a31d76c31bc18933f480416e200a935a89fc31d3964998");
    }

    #[test]
    fn test_single_zero_byte() {
        assert_eq!(hex(&[0u8]), "fa61f911c6aaacffaed2fcd7fbed6596035ecc70a9d1b8bf6c610bdea3227f95");
    }

    #[test]
    fn test_short_strings() {
        assert_eq!(hex(b"abc"), "6bf7db6a145eef9ae5d47375e5dcf5e6d42aab4ff114d0600f8eb50a332b67bc");
        assert_eq!(
            hex(b"The quick brown fox jumps over the lazy dog"),
            "7e0cf6c8cb29e0add69c48891400219737c1632a7782161ac02f27ee78826038"
        );
    }

    #[test]
    fn test_one_byte_of_padding() {
        // 55 bytes leave room for exactly 0x81 before the length
        assert_eq!(
            hex(&[0u8; 55]),
            "4950a4e12427aad11f84fe7e0788e774c61103638da16e09207b753bb9a44777"
        );
    }

    #[test]
    fn test_exact_block_needs_padding_block() {
        assert_eq!(
            hex(&[0u8; 64]),
            "f16d3d43ca167807d661e8f4b29b610f4a420c1e9f98c3211bc337a6d716b739"
        );
    }

    #[test]
    fn test_two_block_finalization() {
        assert_eq!(
            hex(&[0u8; 72]),
            "6aa68dbb4795f030660f6cd32472fc23e06c04c643a8c3ddbd80216826fca4ba"
        );
        // header sized input
        assert_eq!(
            hex(&[0u8; 80]),
            "1beb6d9960f931790caf8b8dde245415f19d7efc1a55952f5d83aaa1cf6d8ce0"
        );
    }

    #[test]
    fn test_differs_from_full_round_blake() {
        // BLAKE-256 (14 rounds) of the empty string
        assert_ne!(hex(b""), "716f6e863f744b9ac22c97ec7b76ea5f5908bc5b2f67c61510bfc4751384ea7a");
    }
}
