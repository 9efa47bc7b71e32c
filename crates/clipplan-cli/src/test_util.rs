//! Helpers for tests that touch process-wide environment variables.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or write env vars.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores `XDG_CONFIG_HOME` on drop, even if the test body panics.
struct RestoreXdg(Option<String>);

impl Drop for RestoreXdg {
    fn drop(&mut self) {
        match self.0.take() {
            Some(x) => unsafe { std::env::set_var("XDG_CONFIG_HOME", x) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }
    }
}

/// Run `f` with `XDG_CONFIG_HOME` pointed at `dir`. Caller must hold [`lock_env`].
pub fn with_config_home<R>(dir: &Path, f: impl FnOnce() -> R) -> R {
    let _restore = RestoreXdg(std::env::var("XDG_CONFIG_HOME").ok());
    unsafe { std::env::set_var("XDG_CONFIG_HOME", dir) };
    f()
}
