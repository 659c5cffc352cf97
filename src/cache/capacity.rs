//! Capacity Module
//!
//! Parses human-readable memory sizes such as `100KB` or `1gb` into bytes.

use crate::error::{CacheError, Result};

// == Units ==
pub const KB: u64 = 1024;
pub const MB: u64 = 1024 * KB;
pub const GB: u64 = 1024 * MB;

// == Parse Size ==
/// Parses `<positive-integer><unit>` where unit is `KB`, `MB` or `GB`.
///
/// Units are case-insensitive and binary (`1KB == 1024`).
pub fn parse_size(spec: &str) -> Result<u64> {
    if spec.len() < 3 {
        return Err(invalid(spec, "expected a number followed by KB, MB or GB"));
    }

    let split = spec.len() - 2;
    let (digits, unit) = match (spec.get(..split), spec.get(split..)) {
        (Some(digits), Some(unit)) => (digits, unit),
        _ => return Err(invalid(spec, "unrecognized unit")),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(spec, "size must be a positive integer"));
    }
    let amount: u64 = digits
        .parse()
        .map_err(|_| invalid(spec, "size is out of range"))?;
    if amount == 0 {
        return Err(invalid(spec, "size must be a positive integer"));
    }

    let multiplier = match unit.to_ascii_uppercase().as_str() {
        "KB" => KB,
        "MB" => MB,
        "GB" => GB,
        _ => return Err(invalid(spec, "unrecognized unit")),
    };

    amount
        .checked_mul(multiplier)
        .ok_or_else(|| invalid(spec, "size is out of range"))
}

fn invalid(spec: &str, reason: &str) -> CacheError {
    CacheError::InvalidCapacity(format!("'{}': {}", spec, reason))
}
