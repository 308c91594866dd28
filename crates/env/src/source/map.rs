#[cfg(any(test, feature = "test-utils"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-utils"))]
use std::ffi::OsString;

#[cfg(any(test, feature = "test-utils"))]
use super::EnvSource;

/// In-memory environment for tests; never touches process state.
///
/// ```ignore
/// let env = Env::new(MapEnv::new().with("PORT", "9090"));
/// assert_eq!(env.u16("PORT", 8080), 9090);
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MapEnv::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.vars.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl EnvSource for MapEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
