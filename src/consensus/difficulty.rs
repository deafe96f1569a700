//! Compact difficulty (`bits`) helpers
//!
//! Read-only views of the header's compact target; no retargeting here.

/// Exponent at which `difficulty_from_bits` reports 1.0 for mantissa 0xffff
const DIFFICULTY_ONE_EXPONENT: u32 = 29;

/// Difficulty relative to the minimum target, as shown to users
///
/// A zero mantissa yields `f64::INFINITY`.
pub fn difficulty_from_bits(bits: u32) -> f64 {
    let mut shift = (bits >> 24) & 0xff;
    let mut diff = f64::from(0x0000ffffu32) / f64::from(bits & 0x00ff_ffff);

    while shift < DIFFICULTY_ONE_EXPONENT {
        diff *= 256.0;
        shift += 1;
    }
    while shift > DIFFICULTY_ONE_EXPONENT {
        diff /= 256.0;
        shift -= 1;
    }

    diff
}

/// Big-endian hex of the compact value, e.g. `1d00ffff`
pub fn bits_to_hex(bits: u32) -> String {
    hex::encode(bits.to_be_bytes())
}

/// Expand compact difficulty to a 256-bit big-endian target
///
/// Negative or zero-exponent encodings expand to the zero target.
pub fn compact_to_target(compact: u32) -> [u8; 32] {
    let exponent = (compact >> 24) as usize;
    let mantissa = compact & 0x007F_FFFF;

    let mut target = [0u8; 32];

    if exponent == 0 || compact & 0x0080_0000 != 0 {
        return target;
    }

    if exponent <= 3 {
        let value = mantissa >> (8 * (3 - exponent));
        target[31] = (value & 0xFF) as u8;
        target[30] = ((value >> 8) & 0xFF) as u8;
        target[29] = ((value >> 16) & 0xFF) as u8;
    } else {
        let mantissa_bytes = [(mantissa >> 16) as u8, (mantissa >> 8) as u8, mantissa as u8];
        for (offset, byte) in mantissa_bytes.iter().enumerate() {
            // bytes shifted past the top of the target are dropped
            if let Some(index) = (32 + offset).checked_sub(exponent) {
                if index < 32 {
                    target[index] = *byte;
                }
            }
        }
    }

    target
}
