//! Blacklist management module
//!
//! A small built-in list of common passwords is always active. An extension
//! list can be loaded once from an external file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};
use thiserror::Error;

/// Passwords rejected regardless of configuration.
pub const DEFAULT_BLACKLIST: [&str; 7] = [
    "password",
    "123456",
    "qwerty",
    "password123",
    "admin",
    "letmein",
    "welcome",
];

/// Tip reported for blacklisted passwords.
pub const COMMON_PASSWORD_TIP: &str =
    "This password is too common and easily guessed. Use a unique one.";

/// Environment variable holding the extension blacklist path.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

static EXTRA_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
    #[error("PWD_BLACKLIST_PATH is not set")]
    PathNotConfigured,
}

fn read_extra() -> RwLockReadGuard<'static, Option<HashSet<String>>> {
    EXTRA_PASSWORDS.read().unwrap_or_else(|e| e.into_inner())
}

/// Returns the extension blacklist path from `PWD_BLACKLIST_PATH`, if set.
pub fn get_blacklist_path() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
}

/// Loads the extension blacklist from the file named by `PWD_BLACKLIST_PATH`.
///
/// If a list is already loaded, its count is returned and the variable is
/// not consulted.
///
/// # Errors
///
/// Returns error if:
/// - The variable is not set
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    if let Some(set) = read_extra().as_ref() {
        return Ok(set.len());
    }
    let path = get_blacklist_path().ok_or(BlacklistError::PathNotConfigured)?;
    init_blacklist_from_path(path)
}

/// Loads the extension blacklist from a specific file path.
///
/// One password per line; entries are trimmed and lowercased, blank lines
/// are skipped. Returns the number of distinct entries. Once loaded, later
/// calls return the existing count without touching the filesystem.
///
/// # Example
///
/// ```rust,no_run
/// pwd_toolkit::init_blacklist_from_path("/etc/myapp/blacklist.txt")?;
/// assert!(pwd_toolkit::is_blacklisted("qwerty"));
/// # Ok::<(), pwd_toolkit::BlacklistError>(())
/// ```
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    if let Some(set) = read_extra().as_ref() {
        return Ok(set.len());
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTRA_PASSWORDS.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have won the race; keep its list.
        if let Some(existing) = guard.as_ref() {
            return Ok(existing.len());
        }
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist extended: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns the effective blacklist: built-in entries plus any loaded extension.
pub fn get_blacklist() -> HashSet<String> {
    let mut set: HashSet<String> = DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect();
    if let Some(extra) = read_extra().as_ref() {
        set.extend(extra.iter().cloned());
    }
    set
}

/// Checks if a password is blacklisted (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if DEFAULT_BLACKLIST.contains(&lowered.as_str()) {
        return true;
    }
    read_extra()
        .as_ref()
        .is_some_and(|extra| extra.contains(&lowered))
}

/// Drops the extension list for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = EXTRA_PASSWORDS.write().unwrap_or_else(|e| e.into_inner());
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_default_entries_always_blacklisted() {
        for pwd in DEFAULT_BLACKLIST {
            assert!(is_blacklisted(pwd), "{pwd} should be blacklisted");
        }
    }

    #[test]
    fn test_default_entries_case_insensitive() {
        assert!(is_blacklisted("PASSWORD"));
        assert!(is_blacklisted("LetMeIn"));
        assert!(is_blacklisted("QWERTY"));
    }

    #[test]
    fn test_near_miss_not_blacklisted() {
        assert!(!is_blacklisted("password1"));
        assert!(!is_blacklisted(" qwerty"));
        assert!(!is_blacklisted("Tr0ub4dor&3"));
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_unset() {
        reset_blacklist_for_testing();
        remove_env(BLACKLIST_PATH_ENV);
        assert_eq!(get_blacklist_path(), None);
        assert!(matches!(init_blacklist(), Err(BlacklistError::PathNotConfigured)));
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        assert_eq!(get_blacklist_path(), Some(PathBuf::from(custom_path)));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        match init_blacklist() {
            Err(BlacklistError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/blacklist.txt"));
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_empty_file() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["", "   "]);

        let result = init_blacklist_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_success_dedupes_and_normalizes() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["Trustno1", "  trustno1  ", "", "dragonfly77"]);
        set_env(BLACKLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        let count = init_blacklist().expect("blacklist should load");
        assert_eq!(count, 2);

        remove_env(BLACKLIST_PATH_ENV);
        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_idempotent() {
        reset_blacklist_for_testing();
        let first = setup_with_tempfile(&["trustno1"]);
        let second = setup_with_tempfile(&["dragonfly77", "sunshine42"]);

        assert_eq!(init_blacklist_from_path(first.path()).unwrap(), 1);
        assert_eq!(init_blacklist_from_path(second.path()).unwrap(), 1);
        assert!(!is_blacklisted("sunshine42"));

        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_blacklist_after_path_load_ignores_unset_env() {
        reset_blacklist_for_testing();
        remove_env(BLACKLIST_PATH_ENV);
        let temp_file = setup_with_tempfile(&["trustno1", "dragonfly77"]);

        assert_eq!(init_blacklist_from_path(temp_file.path()).unwrap(), 2);
        assert_eq!(init_blacklist().unwrap(), 2);

        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_is_blacklisted_extension() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["trustno1"]);
        init_blacklist_from_path(temp_file.path()).unwrap();

        assert!(is_blacklisted("trustno1"));
        assert!(is_blacklisted("TRUSTNO1"));
        assert!(is_blacklisted("qwerty"));
        assert!(!is_blacklisted("veryuncommonpassword987"));

        let effective = get_blacklist();
        assert_eq!(effective.len(), DEFAULT_BLACKLIST.len() + 1);
        assert!(effective.contains("trustno1"));

        reset_blacklist_for_testing();
    }
}
