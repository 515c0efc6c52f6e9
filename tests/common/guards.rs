//! RAII guards for process-global state in tests.
//!
//! Tests that mutate environment variables must guarantee restoration
//! even if the test panics, and must be marked `#[serial]` since the
//! environment is process-global.

use std::env;
use std::ffi::OsString;

/// RAII guard that restores an environment variable on drop.
pub struct EnvGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvGuard {
    /// Snapshot the variable and set it to a new value.
    ///
    /// # Safety rationale
    ///
    /// `std::env::set_var` is unsafe in Rust 2024 because concurrent
    /// reads race with it; guarded tests run under `#[serial]`.
    pub fn set(key: &str, value: &str) -> Self {
        let original = env::var_os(key);
        unsafe { env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
        }
    }

    /// Snapshot the variable and remove it.
    pub fn unset(key: &str) -> Self {
        let original = env::var_os(key);
        unsafe { env::remove_var(key) };
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => unsafe { env::set_var(&self.key, value) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}
