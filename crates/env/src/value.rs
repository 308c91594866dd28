//! Parsing raw environment strings into typed values.
//!
//! Responsibilities:
//! - Define the [`EnvValue`] trait that every accessor type implements.
//! - Provide implementations for strings, booleans, integers, floats and durations.
//!
//! Does NOT handle:
//! - Looking values up (see source/).
//! - Choosing between the parsed value and the default (see accessor.rs).
//!
//! Invariants:
//! - Integers are base-10 only; unsigned types reject any sign.
//! - Out-of-range integers are rejected, never truncated or saturated.
//! - Finite float literals that overflow to infinity are rejected.

use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::ParseError;

/// A type that can be read from an environment variable.
///
/// Implement this for your own types to read them through [`Env::get`](crate::Env::get).
pub trait EnvValue: Sized {
    /// Short type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Whether an empty value is a valid encoding of this type.
    const ACCEPTS_EMPTY: bool = false;

    /// Parse the raw variable value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing why `value` is not a valid `Self`.
    fn parse_env(value: &str) -> Result<Self, ParseError>;
}

impl EnvValue for String {
    const TYPE_NAME: &'static str = "string";
    const ACCEPTS_EMPTY: bool = true;

    fn parse_env(value: &str) -> Result<Self, ParseError> {
        Ok(value.to_string())
    }
}

impl EnvValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_env(value: &str) -> Result<Self, ParseError> {
        match value.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => Ok(true),
            "0" | "f" | "false" => Ok(false),
            _ => Err(ParseError::InvalidBool(value.to_string())),
        }
    }
}

macro_rules! impl_signed_env_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_env(value: &str) -> Result<Self, ParseError> {
                    value
                        .parse::<$ty>()
                        .map_err(|e| ParseError::from_int(value, Self::TYPE_NAME, e))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_env_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_env(value: &str) -> Result<Self, ParseError> {
                    // `FromStr` tolerates a leading '+'; parsing the bare sign
                    // yields the same InvalidDigit error a '-' would.
                    let digits = if value.starts_with('+') { "+" } else { value };
                    digits
                        .parse::<$ty>()
                        .map_err(|e| ParseError::from_int(value, Self::TYPE_NAME, e))
                }
            }
        )*
    };
}

impl_signed_env_value!(isize, i32, i64);
impl_unsigned_env_value!(u8, u16, u32, u64);

impl EnvValue for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn parse_env(value: &str) -> Result<Self, ParseError> {
        let parsed: f64 = value.parse()?;
        if parsed.is_infinite() && !is_infinity_literal(value) {
            return Err(ParseError::OutOfRange {
                value: value.to_string(),
                target: Self::TYPE_NAME,
            });
        }
        Ok(parsed)
    }
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl EnvValue for Duration {
    const TYPE_NAME: &'static str = "duration";

    fn parse_env(value: &str) -> Result<Self, ParseError> {
        Ok(parse_duration(value)?)
    }
}
