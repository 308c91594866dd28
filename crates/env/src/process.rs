//! Accessors over the process environment.
//!
//! Each function is a shorthand for the matching [`Env`] method on
//! [`Env::system()`]: it scans the current environment, parses the value and
//! falls back to `default` when the variable is unset or unparsable.

use std::time::Duration;

use crate::accessor::Env;
use crate::value::EnvValue;

/// Read `key` from the process environment as any [`EnvValue`].
pub fn get<T: EnvValue>(key: &str, default: T) -> T {
    Env::system().get(key, default)
}

/// An empty variable yields the empty string, not `default`.
pub fn string(key: &str, default: impl Into<String>) -> String {
    Env::system().string(key, default)
}

pub fn bool(key: &str, default: bool) -> bool {
    Env::system().bool(key, default)
}

/// Platform-native signed integer.
pub fn isize(key: &str, default: isize) -> isize {
    Env::system().isize(key, default)
}

pub fn i32(key: &str, default: i32) -> i32 {
    Env::system().i32(key, default)
}

pub fn i64(key: &str, default: i64) -> i64 {
    Env::system().i64(key, default)
}

pub fn u8(key: &str, default: u8) -> u8 {
    Env::system().u8(key, default)
}

pub fn u16(key: &str, default: u16) -> u16 {
    Env::system().u16(key, default)
}

pub fn u32(key: &str, default: u32) -> u32 {
    Env::system().u32(key, default)
}

pub fn u64(key: &str, default: u64) -> u64 {
    Env::system().u64(key, default)
}

pub fn f64(key: &str, default: f64) -> f64 {
    Env::system().f64(key, default)
}

pub fn duration(key: &str, default: Duration) -> Duration {
    Env::system().duration(key, default)
}
