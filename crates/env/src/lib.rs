//! Typed, default-returning access to environment variables.
//!
//! Every accessor looks a variable up, parses it, and returns the caller's
//! default when the variable is unset or its value does not parse. No
//! accessor returns an error; discarded values are reported through
//! `tracing` at debug level and through an optional hook on [`Env`].
//!
//! ```
//! use std::time::Duration;
//!
//! let port = typed_env::u16("_TYPED_ENV_DOC_PORT", 8080);
//! let timeout = typed_env::duration("_TYPED_ENV_DOC_TIMEOUT", Duration::from_secs(30));
//! assert_eq!(port, 8080);
//! assert_eq!(timeout, Duration::from_secs(30));
//! ```
//!
//! Tests can swap the process environment for a fake one:
//!
//! ```ignore
//! use typed_env::{Env, MapEnv};
//!
//! let env = Env::new(MapEnv::new().with("PORT", ""));
//! assert_eq!(env.u16("PORT", 8080), 8080);
//! ```

mod accessor;
pub mod constants;
mod duration;
mod error;
mod process;
pub mod source;
mod value;

pub use accessor::{Env, Fallback};
pub use duration::parse_duration;
pub use error::{DurationError, ParseError};
pub use process::{bool, duration, f64, get, i32, i64, isize, string, u8, u16, u32, u64};
#[cfg(any(test, feature = "test-utils"))]
pub use source::MapEnv;
pub use source::{EnvSource, FnEnv, SystemEnv, from_fn};
pub use value::EnvValue;
