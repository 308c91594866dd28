//! Typed accessors over an environment source.
//!
//! Responsibilities:
//! - Resolve a key through an [`EnvSource`] and parse it with [`EnvValue`].
//! - Fall back to the caller's default when the key is unset or unparsable.
//! - Report discarded values to tracing and to an optional fallback hook.
//!
//! Does NOT handle:
//! - Caching; every call performs a fresh lookup.
//! - Surfacing errors; every accessor returns a usable value.
//!
//! Invariants:
//! - Unset keys return the default without logging or invoking the hook.
//! - A successfully parsed value is returned even when it equals the type's zero value.
//! - Raw values are never logged, only keys and failure reasons.

use std::ffi::OsStr;
use std::fmt;
use std::time::Duration;

use crate::error::ParseError;
use crate::source::{EnvSource, SystemEnv};
use crate::value::EnvValue;

type FallbackHook = Box<dyn Fn(&Fallback<'_>) + Send + Sync>;

/// A present value that was discarded in favour of the default.
#[derive(Debug)]
pub struct Fallback<'a> {
    /// Variable name that was looked up.
    pub key: &'a str,
    /// Raw value as found in the source.
    pub raw: &'a OsStr,
    /// Name of the type the value was parsed as.
    pub target: &'static str,
    /// Why the value was rejected.
    pub error: &'a ParseError,
}

/// Typed, default-returning reader over an [`EnvSource`].
///
/// ```
/// use std::time::Duration;
/// use typed_env::{Env, from_fn};
///
/// let env = Env::new(from_fn(|key| match key {
///     "PORT" => Some("9090".to_string()),
///     "TIMEOUT" => Some("1m30s".to_string()),
///     _ => None,
/// }));
/// assert_eq!(env.u16("PORT", 8080), 9090);
/// assert_eq!(env.duration("TIMEOUT", Duration::from_secs(5)), Duration::from_secs(90));
/// assert!(env.bool("DEBUG", true));
/// ```
pub struct Env<S = SystemEnv> {
    source: S,
    on_fallback: Option<FallbackHook>,
}

impl Env<SystemEnv> {
    /// Reader over the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl Default for Env<SystemEnv> {
    fn default() -> Self {
        Self::system()
    }
}

impl<S: EnvSource> Env<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            on_fallback: None,
        }
    }

    /// Register a callback notified whenever a present value is discarded.
    ///
    /// The callback does not change what the accessor returns.
    pub fn with_fallback_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Fallback<'_>) + Send + Sync + 'static,
    {
        self.on_fallback = Some(Box::new(hook));
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read `key` as `T`, returning `default` if it is unset or does not parse.
    pub fn get<T: EnvValue>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.source.lookup(key) else {
            return default;
        };

        match parse_raw::<T>(&raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(
                    key,
                    value_type = T::TYPE_NAME,
                    reason = error.reason(),
                    "Environment value could not be parsed, using default"
                );
                if let Some(hook) = &self.on_fallback {
                    hook(&Fallback {
                        key,
                        raw: &raw,
                        target: T::TYPE_NAME,
                        error: &error,
                    });
                }
                default
            }
        }
    }

    /// Raw value of `key`; an empty value is returned as-is, not replaced.
    pub fn string(&self, key: &str, default: impl Into<String>) -> String {
        self.get(key, default.into())
    }

    /// Accepts `1`, `t`, `true`, `0`, `f`, `false` in any case.
    pub fn bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn isize(&self, key: &str, default: isize) -> isize {
        self.get(key, default)
    }

    pub fn i32(&self, key: &str, default: i32) -> i32 {
        self.get(key, default)
    }

    pub fn i64(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    pub fn u8(&self, key: &str, default: u8) -> u8 {
        self.get(key, default)
    }

    pub fn u16(&self, key: &str, default: u16) -> u16 {
        self.get(key, default)
    }

    pub fn u32(&self, key: &str, default: u32) -> u32 {
        self.get(key, default)
    }

    pub fn u64(&self, key: &str, default: u64) -> u64 {
        self.get(key, default)
    }

    pub fn f64(&self, key: &str, default: f64) -> f64 {
        self.get(key, default)
    }

    /// Parses strings like `600s` or `1h30m`; see [`parse_duration`](crate::parse_duration).
    pub fn duration(&self, key: &str, default: Duration) -> Duration {
        self.get(key, default)
    }
}

fn parse_raw<T: EnvValue>(raw: &OsStr) -> Result<T, ParseError> {
    let value = raw.to_str().ok_or(ParseError::NotUnicode)?;
    if value.is_empty() && !T::ACCEPTS_EMPTY {
        return Err(ParseError::Empty);
    }
    T::parse_env(value)
}

impl<S: fmt::Debug> fmt::Debug for Env<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("source", &self.source)
            .field("on_fallback", &self.on_fallback.is_some())
            .finish()
    }
}
