//! Structure section - rejects absent input and backslashes.

/// Character reserved by callers as an escape sentinel.
pub const RESERVED_CHAR: char = '\\';

/// Checks that a candidate is present and free of the reserved backslash.
///
/// # Returns
/// - `true` if the candidate can be evaluated further
/// - `false` if it is absent or contains a backslash
pub fn structure_section(password: Option<&str>) -> bool {
    password.is_some_and(|pwd| !pwd.contains(RESERVED_CHAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_section_absent() {
        assert!(!structure_section(None));
    }

    #[test]
    fn test_structure_section_backslash() {
        assert!(!structure_section(Some("Pass\\word1!")));
        assert!(!structure_section(Some("\\")));
    }

    #[test]
    fn test_structure_section_valid() {
        assert!(structure_section(Some("Password1!")));
        assert!(structure_section(Some("")));
        assert!(structure_section(Some("forward/slash")));
    }
}
