//! Client identity strings, hex and integer helpers, bounded random numbers

use rand::rngs::OsRng;
use rand::Rng;

/// Dotted form of an integer client version (`1000000 * major + 10000 * minor + ...`)
pub fn format_version(version: u32) -> String {
    let major = version / 1_000_000;
    let minor = (version / 10_000) % 100;
    let revision = (version / 100) % 100;
    let build = version % 100;

    if build == 0 {
        format!("{}.{}.{}", major, minor, revision)
    } else {
        format!("{}.{}.{}.{}", major, minor, revision, build)
    }
}

/// BIP14 user agent: `/name:version(comment; comment)/`
pub fn format_sub_version(name: &str, version: u32, comments: &[&str]) -> String {
    let mut out = format!("/{}:{}", name, format_version(version));
    if !comments.is_empty() {
        out.push('(');
        out.push_str(&comments.join("; "));
        out.push(')');
    }
    out.push('/');
    out
}

/// Non-empty, even length, hex digits only
pub fn is_hex(value: &str) -> bool {
    !value.is_empty() && value.len() % 2 == 0 && value.bytes().all(|c| c.is_ascii_hexdigit())
}

/// Lowercase hex, optionally one space between bytes
pub fn hex_string(data: &[u8], spaces: bool) -> String {
    if !spaces {
        return hex::encode(data);
    }
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode hex, ignoring spaces
pub fn from_hex(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = value.chars().filter(|c| *c != ' ').collect();
    hex::decode(compact)
}

/// Bytes taken by the compact-size encoding of `n`
pub fn var_int_size(n: u64) -> usize {
    match n {
        0..=252 => 1,
        253..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Swap the byte order of a 32-bit word
pub fn byte_reverse(value: u32) -> u32 {
    value.swap_bytes()
}

/// Uniform in `[0, max)`, zero when `max` is zero
pub fn random_below(max: u64) -> u64 {
    if max == 0 {
        return 0;
    }
    OsRng.gen_range(0..max)
}

/// Uniform in `[low, high]`, `low` when the range is empty
pub fn random_u32_range(low: u32, high: u32) -> u32 {
    if low >= high {
        return low;
    }
    OsRng.gen_range(low..=high)
}
