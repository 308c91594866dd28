//! Duration string parsing.
//!
//! Responsibilities:
//! - Parse compound `<number><unit>` strings such as `600s`, `1h30m`, `1.5h`.
//!
//! Does NOT handle:
//! - Calendar units (days, weeks) or whitespace between segments.
//! - Negative durations, which `std::time::Duration` cannot hold.
//!
//! Invariants:
//! - Recognised units: `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`.
//! - The bare literal `0` (optionally signed) is the only unit-less input accepted.
//! - Fractions are truncated to whole nanoseconds.

use std::time::Duration;

use crate::constants::{
    MAX_FRACTION_DIGITS, NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_MINUTE,
    NANOS_PER_SECOND,
};
use crate::error::DurationError;

/// Parse a duration string like `300ms`, `-0`, `2h45m30.5s`.
///
/// # Errors
///
/// Returns a [`DurationError`] when the string is empty, malformed, uses an
/// unknown unit, overflows `u64` nanoseconds, or is negative and non-zero.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        Some(_) => (false, input),
        None => return Err(DurationError::Empty),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole_digits, after) = split_digits(rest);
        let (frac_digits, after) = match after.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after),
        };
        if whole_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::Invalid(input.to_string()));
        }

        let unit_end = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let unit_nanos = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole = parse_whole(whole_digits)
            .and_then(|n| n.checked_mul(unit_nanos))
            .ok_or_else(|| DurationError::Overflow(input.to_string()))?;
        total = total
            .checked_add(whole)
            .and_then(|t| t.checked_add(fraction_nanos(frac_digits, unit_nanos)))
            .ok_or_else(|| DurationError::Overflow(input.to_string()))?;

        rest = after;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(input.to_string()));
    }
    Ok(Duration::from_nanos(total))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Empty is zero (`.5s`); `None` on overflow.
fn parse_whole(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

fn fraction_nanos(digits: &str, unit_nanos: u64) -> u64 {
    let mut numerator: u128 = 0;
    let mut scale: u128 = 1;
    for digit in digits.bytes().take(MAX_FRACTION_DIGITS) {
        numerator = numerator * 10 + u128::from(digit - b'0');
        scale *= 10;
    }
    // Always below unit_nanos, so the conversion cannot fail.
    u64::try_from(numerator * u128::from(unit_nanos) / scale).unwrap_or(u64::MAX)
}
