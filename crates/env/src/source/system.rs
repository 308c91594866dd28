use std::env;
use std::ffi::OsString;

use super::EnvSource;

/// Zero-sized type that reads the process environment.
///
/// Every lookup scans the whole table; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        env::vars_os()
            .find(|(name, _)| name.as_os_str() == key)
            .map(|(_, value)| value)
    }
}
