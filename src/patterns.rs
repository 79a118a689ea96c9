//! Prohibited pattern files
//!
//! Loads prohibited patterns from a plain text file, one pattern per line,
//! ready to be handed to [`PasswordPolicy::set_prohibited_patterns`](crate::PasswordPolicy::set_prohibited_patterns).

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PATTERNS_PATH_ENV: &str = "PWD_PROHIBITED_PATTERNS_PATH";
const DEFAULT_PATTERNS_PATH: &str = "./assets/prohibited.txt";

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Prohibited patterns file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read prohibited patterns file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Prohibited patterns file is empty")]
    EmptyFile,
}

/// Returns the prohibited patterns file path.
///
/// Priority:
/// 1. Environment variable `PWD_PROHIBITED_PATTERNS_PATH`
/// 2. Default path `./assets/prohibited.txt`
pub fn prohibited_patterns_path() -> PathBuf {
    std::env::var(PATTERNS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PATTERNS_PATH))
}

/// Loads prohibited patterns from the path given by [`prohibited_patterns_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no patterns
///
/// # Example
///
/// ```rust,ignore
/// let mut policy = pwd_policy::PasswordPolicy::default();
/// policy.set_prohibited_patterns(Some(pwd_policy::load_prohibited_patterns()?));
/// ```
pub fn load_prohibited_patterns() -> Result<Vec<String>, PatternsError> {
    load_prohibited_patterns_from_path(prohibited_patterns_path())
}

/// Loads prohibited patterns from a specific file path.
///
/// Lines are trimmed and blank lines skipped. The file order is kept, since
/// it decides which pattern gets reported first. Casing is left untouched;
/// case folding happens at evaluation time according to the policy.
pub fn load_prohibited_patterns_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<String>, PatternsError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Prohibited patterns loading FAILED: FileNotFound {:?}", path);
        return Err(PatternsError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let patterns: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if patterns.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Prohibited patterns loading FAILED: Empty file {:?}", path);
        return Err(PatternsError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Prohibited patterns loaded: {} patterns from {:?}",
        patterns.len(),
        path
    );

    Ok(patterns)
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
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_prohibited_patterns_path_default() {
        remove_env(PATTERNS_PATH_ENV);

        let path = prohibited_patterns_path();
        assert_eq!(path, PathBuf::from("./assets/prohibited.txt"));
    }

    #[test]
    #[serial]
    fn test_prohibited_patterns_path_from_env() {
        let custom_path = "/custom/path/prohibited.txt";
        set_env(PATTERNS_PATH_ENV, custom_path);

        let path = prohibited_patterns_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(PATTERNS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_from_env_path() {
        let temp_file = setup_with_tempfile(&["admin", "qwerty"]);
        let path = temp_file.path().to_str().unwrap();
        set_env(PATTERNS_PATH_ENV, path);

        let patterns = load_prohibited_patterns().expect("patterns should load");
        assert_eq!(patterns, vec!["admin".to_string(), "qwerty".to_string()]);

        remove_env(PATTERNS_PATH_ENV);
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_prohibited_patterns_from_path("/nonexistent/path/prohibited.txt");
        match result {
            Err(PatternsError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = load_prohibited_patterns_from_path(temp_file.path());
        assert!(matches!(result, Err(PatternsError::EmptyFile)));
    }

    #[test]
    fn test_load_keeps_order_and_case() {
        let temp_file = setup_with_tempfile(&["  Zebra ", "", "admin", "Password"]);
        let patterns = load_prohibited_patterns_from_path(temp_file.path()).unwrap();
        assert_eq!(patterns, vec!["Zebra", "admin", "Password"]);
    }

    #[test]
    fn test_loaded_patterns_feed_policy() {
        let temp_file = setup_with_tempfile(&["admin"]);
        let mut policy = crate::PasswordPolicy::default();
        policy.set_prohibited_patterns(Some(
            load_prohibited_patterns_from_path(temp_file.path()).unwrap(),
        ));

        let result = policy.evaluate_str(Some("MyADMINpass1!"));
        assert_eq!(result.found_prohibited_substring(), Some("admin"));
    }
}
