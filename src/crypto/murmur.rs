//! MurmurHash3 (x86, 32-bit)
//!
//! Non-cryptographic; used for bloom-filter style lookups only.

use std::io::Cursor;

/// Hash `data` with the 32-bit MurmurHash3 variant.
///
/// Reading from an in-memory cursor cannot fail, so the result is total.
pub fn murmur3_32(seed: u32, data: &[u8]) -> u32 {
    let mut cursor = Cursor::new(data);
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(murmur3_32(0, b""), 0);
        assert_eq!(murmur3_32(1, b""), 0x514e28b7);
        assert_eq!(murmur3_32(0xffffffff, b""), 0x81f16f39);
    }

    #[test]
    fn test_full_blocks() {
        assert_eq!(murmur3_32(0, &[0, 0, 0, 0]), 0x2362f9de);
        assert_eq!(murmur3_32(0x9747b28c, b"aaaa"), 0x5a97808a);
    }

    #[test]
    fn test_tail_byte_order() {
        assert_eq!(murmur3_32(0, &[0x21, 0x43, 0x65]), 0x7e4a8634);
        assert_eq!(murmur3_32(0, &[0x21, 0x43]), 0xa0f7b07a);
        assert_eq!(murmur3_32(0, &[0x21]), 0x72661cf4);
        assert_eq!(murmur3_32(0x9747b28c, b"abc"), 0xc84a62dd);
    }

    #[test]
    fn test_known_strings() {
        assert_eq!(murmur3_32(1234, b"Hello, world!"), 0xfaf6cdb3);
        assert_eq!(
            murmur3_32(0x9747b28c, b"The quick brown fox jumps over the lazy dog"),
            0x2fa826cd
        );
    }
}
