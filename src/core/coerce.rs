//! String to number coercions.
//!
//! `string_to_u64`, `string_to_int` and `string_to_float` never fail: on bad
//! input they fall back to the integral part or zero. Callers that need strict
//! validation must check the input themselves. Out-of-range integers saturate
//! to the type's bounds. `parse_memory_string` is the strict exception and
//! returns an error.

use crate::error::{ConvError, Result};
use std::num::IntErrorKind;

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;

/// `"123"` or `"123.45"` -> 123, too large -> `u64::MAX`, anything else -> 0.
///
/// Signs are not accepted, so `"+5"` is 0 as well.
pub fn string_to_u64(s: &str) -> u64 {
    let integral = s.split('.').next().unwrap_or_default();
    if integral.starts_with('+') {
        return 0;
    }
    match integral.parse::<u64>() {
        Ok(v) => v,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

/// `"42"` -> 42, out of range -> `i64::MAX` / `i64::MIN`, anything else -> 0
pub fn string_to_int(s: &str) -> i64 {
    match s.parse::<i64>() {
        Ok(v) => v,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// `"3.14"` -> 3.14, anything unparsable -> 0.0
pub fn string_to_float(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

/// Parse a memory size such as `"512MiB"`, `"1.5 GiB"` or `"20B"` into bytes.
///
/// Units are binary (`B`, `KiB`, `MiB`, `GiB`, `TiB`) and case-insensitive.
/// Fractional results are truncated.
pub fn parse_memory_string(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    if trimmed.len() < 2 {
        return Err(ConvError::invalid_memory_string(trimmed));
    }

    let unit_start = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(0);
    if unit_start == 0 {
        return Err(ConvError::invalid_memory_string(trimmed));
    }

    let (number, unit) = trimmed.split_at(unit_start);
    let value: f64 = number.parse().map_err(|_| {
        ConvError::invalid_memory_string(format!("bad number '{}' in '{}'", number, trimmed))
    })?;

    let multiplier = match unit.trim().to_ascii_uppercase().as_str() {
        "B" => 1.0,
        "KIB" => KIB,
        "MIB" => MIB,
        "GIB" => GIB,
        "TIB" => TIB,
        other => {
            return Err(ConvError::invalid_memory_string(format!(
                "unknown unit '{}' in '{}'",
                other, trimmed
            )))
        }
    };

    Ok((value * multiplier) as u64)
}
