//! Environment sources the accessors read from.
//!
//! Responsibilities:
//! - Define the [`EnvSource`] lookup capability.
//! - Provide the process-backed [`SystemEnv`] and a closure adapter ([`FnEnv`]).
//! - Provide the in-memory [`MapEnv`] for tests (`test-utils` feature).
//!
//! Does NOT handle:
//! - Parsing values (see value.rs).
//! - Mutating the process environment.
//!
//! Invariants:
//! - A source returns the raw value unchanged; empty strings are present, not unset.

use std::ffi::OsString;

mod func;
mod map;
mod system;

pub use func::{FnEnv, from_fn};
#[cfg(any(test, feature = "test-utils"))]
pub use map::MapEnv;
pub use system::SystemEnv;

/// Lookup capability for environment variables.
///
/// Does **not** require `Send + Sync`; add the bounds where you need them.
pub trait EnvSource {
    /// Return the raw value of `key`, or `None` when it is unset.
    fn lookup(&self, key: &str) -> Option<OsString>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    #[inline]
    fn lookup(&self, key: &str) -> Option<OsString> {
        (**self).lookup(key)
    }
}
