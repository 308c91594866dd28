use std::ffi::OsString;
use std::fmt;

use super::EnvSource;

/// Adapts a lookup function into an [`EnvSource`].
///
/// Created by [`from_fn`].
#[derive(Clone)]
pub struct FnEnv<F>(F);

/// Build a source from a closure, e.g. to read a prefixed namespace or a
/// table loaded elsewhere.
///
/// ```
/// use typed_env::{Env, from_fn};
///
/// let env = Env::new(from_fn(|key| (key == "WORKERS").then(|| "8".to_string())));
/// assert_eq!(env.u32("WORKERS", 1), 8);
/// assert_eq!(env.u32("THREADS", 1), 1);
/// ```
pub fn from_fn<F>(lookup: F) -> FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnEnv(lookup)
}

impl<F> EnvSource for FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    #[inline]
    fn lookup(&self, key: &str) -> Option<OsString> {
        (self.0)(key).map(OsString::from)
    }
}

impl<F> fmt::Debug for FnEnv<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEnv").finish_non_exhaustive()
    }
}
