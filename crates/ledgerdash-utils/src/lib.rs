//! Currency string helpers
//!
//! Amounts are persisted as display strings (e.g. `"$1,234.50"`).
//! These helpers convert between that representation and
//! `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a currency string into a decimal value
///
/// Strips the currency symbol and thousands separators before parsing.
/// Returns `None` when the remainder is not a number.
pub fn parse_currency(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Format a decimal value as a currency string
///
/// The sign precedes the symbol: `-$1,234.50`.
pub fn format_currency(value: Decimal, symbol: &str, decimal_places: u32) -> String {
    let rounded = value.round_dp(decimal_places);
    let magnitude = rounded.abs().to_string();

    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (magnitude, String::new()),
    };

    let mut frac = frac_part;
    while (frac.len() as u32) < decimal_places {
        frac.push('0');
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{}{}{}", sign, symbol, group_thousands(&int_part))
    } else {
        format!("{}{}{}.{}", sign, symbol, group_thousands(&int_part), frac)
    }
}

/// Insert thousands separators into a digit string
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

// ==================== Tests ====================
