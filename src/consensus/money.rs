//! Monetary amounts
//!
//! Amounts are `i64` counts of the smallest unit; `COIN` has six decimals.

use crate::constants::{COIN, MAX_MONEY_SUPPLY};

/// Check that an amount lies within `0..=MAX_MONEY_SUPPLY`
pub fn money_range(value: i64) -> bool {
    (0..=MAX_MONEY_SUPPLY).contains(&value)
}

/// Render an amount as a decimal string
///
/// Trailing fractional zeros are trimmed but one digit is always kept.
/// With `plus`, positive amounts get a leading `+`.
pub fn format_money(value: i64, plus: bool) -> String {
    let sign = if value < 0 {
        "-"
    } else if plus && value > 0 {
        "+"
    } else {
        ""
    };

    let magnitude = value.unsigned_abs();
    let coin = COIN.unsigned_abs();
    let quotient = magnitude / coin;
    let remainder = magnitude % coin;

    let mut fraction = format!("{:06}", remainder);
    while fraction.len() > 1 && fraction.ends_with('0') {
        fraction.pop();
    }

    format!("{}{}.{}", sign, quotient, fraction)
}
