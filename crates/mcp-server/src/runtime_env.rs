//! Runtime configuration for the server process.
//!
//! Both settings resolve with the same precedence: explicit command-line
//! flag, then environment variable, then default. The defaults are the
//! current working directory and "every package under the root".

use std::env;
use std::path::PathBuf;

/// Environment variable naming the root directory.
pub const ENV_ROOT_DIR: &str = "GODOC_MCP_ROOT_DIR";

/// Environment variable naming the package selector pattern.
pub const ENV_PKG_DIR: &str = "GODOC_MCP_PKG_DIR";

/// Resolve the root directory to load packages from.
pub fn resolve_root_dir(flag: Option<&str>) -> PathBuf {
    if let Some(root) = non_empty(flag) {
        return PathBuf::from(root);
    }
    if let Some(root) = env_value(ENV_ROOT_DIR) {
        return PathBuf::from(root);
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve the package selector pattern; empty means "all packages".
pub fn resolve_pkg_pattern(flag: Option<&str>) -> String {
    if let Some(pattern) = non_empty(flag) {
        return pattern.to_string();
    }
    env_value(ENV_PKG_DIR).unwrap_or_default()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is shared across test threads; serialize every
    // test that touches it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn flag_takes_precedence_over_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(ENV_ROOT_DIR, "/path/to/env");
        let got = resolve_root_dir(Some("/path/to/root"));
        env::remove_var(ENV_ROOT_DIR);
        assert_eq!(got, PathBuf::from("/path/to/root"));
    }

    #[test]
    fn env_is_used_when_flag_is_absent() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(ENV_PKG_DIR, "./internal/...");
        let got = resolve_pkg_pattern(None);
        env::remove_var(ENV_PKG_DIR);
        assert_eq!(got, "./internal/...");
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var(ENV_ROOT_DIR);
        env::remove_var(ENV_PKG_DIR);
        let got = resolve_root_dir(None);
        assert_eq!(got, env::current_dir().expect("cwd"));
        assert_eq!(resolve_pkg_pattern(None), "");
    }

    #[test]
    fn blank_values_are_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        assert_eq!(resolve_pkg_pattern(Some("   ")), "");
        env::set_var(ENV_ROOT_DIR, "  ");
        let got = resolve_root_dir(None);
        env::remove_var(ENV_ROOT_DIR);
        assert_eq!(got, env::current_dir().expect("cwd"));
    }
}
