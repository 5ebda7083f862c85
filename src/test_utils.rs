//! Test utilities shared across modules.

use std::sync::Mutex;

/// Mutex to serialize tests that read or change process environment variables.
///
/// CLI parsing falls back to `GITHUB_*` variables, which are set when the test
/// suite itself runs under Actions. Tests touching them must hold this lock.
///
/// # Example
///
/// ```ignore
/// use crate::test_utils::ENV_MUTEX;
///
/// #[test]
/// fn test_that_reads_env() {
///     let _lock = ENV_MUTEX.lock().unwrap();
///     // ... test code that sets or depends on env vars ...
/// }
/// ```
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variables the CLI reads as fallbacks.
pub const RESOLVER_ENV_VARS: &[&str] = &[
    "GITHUB_EVENT_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_REF_NAME",
    "GITHUB_REF_TYPE",
    "GITHUB_REF",
    "GITHUB_SHA",
    "GITHUB_REPOSITORY",
    "GITHUB_ENV",
    "GITHUB_OUTPUT",
    "RESOLVE_REF_CONFIG",
];

/// Remove every variable in [`RESOLVER_ENV_VARS`]. Hold [`ENV_MUTEX`] while calling.
pub fn clear_resolver_env() {
    for var in RESOLVER_ENV_VARS {
        std::env::remove_var(var);
    }
}
