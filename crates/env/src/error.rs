//! Error types for environment value parsing.
//!
//! Responsibilities:
//! - Describe why a present environment value could not be used.
//! - Carry enough context (target type, offending text) for diagnostics.
//!
//! Does NOT handle:
//! - Reporting errors to callers of the accessors (they always get a value).
//! - Logging (see accessor.rs).
//!
//! Invariants:
//! - Errors never reach the return value of an accessor; they only flow to
//!   the optional fallback hook, and to tracing via [`ParseError::reason`].
//! - `reason()` never includes the offending value.

use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors produced while parsing a duration string such as `1h30m`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration is empty")]
    Empty,

    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} overflows u64 nanoseconds")]
    Overflow(String),

    #[error("negative duration {0:?} cannot be represented")]
    Negative(String),
}

/// Reasons a present environment value was discarded in favour of the default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,

    #[error("value is not valid unicode")]
    NotUnicode,

    #[error("invalid boolean {0:?}: expected one of 1, t, true, 0, f, false")]
    InvalidBool(String),

    #[error("invalid integer: {0}")]
    InvalidInt(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    #[error("value {value:?} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error(transparent)]
    InvalidDuration(#[from] DurationError),
}

impl ParseError {
    /// Short classification without the offending value, safe to log.
    pub fn reason(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty value",
            ParseError::NotUnicode => "not valid unicode",
            ParseError::InvalidBool(_) => "invalid boolean",
            ParseError::InvalidInt(_) => "invalid integer",
            ParseError::InvalidFloat(_) => "invalid float",
            ParseError::OutOfRange { .. } => "out of range",
            ParseError::InvalidDuration(_) => "invalid duration",
        }
    }

    /// Classify an integer parse failure, keeping overflow distinct from bad syntax.
    pub(crate) fn from_int(value: &str, target: &'static str, error: ParseIntError) -> Self {
        match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
                value: value.to_string(),
                target,
            },
            _ => ParseError::InvalidInt(error),
        }
    }
}
