//! Premint amount formatting.
//!
//! Amounts follow `^(\d*)(?:\.(\d+))?(?:e(\d+))?$`. Anything else, or a value
//! of zero, formats to nothing and the premint is skipped. So does an
//! exponent too large for a uint256.

use std::sync::LazyLock;

use regex::Regex;

/// Exponent used to scale whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalScale {
    /// `10 ** decimals()`, for tokens exposing `decimals()`.
    Decimals,
    /// A fixed exponent, e.g. 18 for super tokens.
    Fixed(u32),
}

impl DecimalScale {
    fn exponent(&self, decimal_place: i64) -> String {
        match (self, decimal_place <= 0) {
            (DecimalScale::Decimals, true) => "decimals()".to_string(),
            (DecimalScale::Decimals, false) => format!("(decimals() - {})", decimal_place),
            (DecimalScale::Fixed(n), true) => n.to_string(),
            (DecimalScale::Fixed(n), false) => format!("({} - {})", n, decimal_place),
        }
    }
}

static PREMINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*)(?:\.(\d+))?(?:e(\d+))?$").expect("valid premint pattern"));

/// Largest exponent accepted. A uint256 holds at most 78 digits.
const MAX_EXPONENT: i64 = 77;

/// Format `amount` as `<units> * 10 ** <exponent>`.
pub fn format_premint(amount: &str, scale: DecimalScale) -> Option<String> {
    let caps = PREMINT.captures(amount)?;
    let group = |i| caps.get(i).map_or("", |m| m.as_str());

    let integer = group(1).trim_start_matches('0');
    let decimals = group(2).trim_end_matches('0');
    let exponent: i64 = match group(3) {
        "" => 0,
        e => e.parse().ok().filter(|e| *e <= MAX_EXPONENT)?,
    };

    let digits = format!("{}{}", integer, decimals);
    if !digits.bytes().any(|b| b != b'0') {
        return None;
    }

    let decimal_place = decimals.len() as i64 - exponent;
    let zeroes = "0".repeat((-decimal_place).max(0) as usize);
    Some(format!(
        "{}{} * 10 ** {}",
        digits,
        zeroes,
        scale.exponent(decimal_place)
    ))
}
