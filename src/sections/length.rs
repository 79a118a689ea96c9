//! Length section - checks password minimum and maximum length.

use crate::policy::PasswordPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthOutcome {
    pub meets_min: bool,
    pub meets_max: bool,
}

/// Checks the password length against both policy bounds.
///
/// Length is counted in characters, not bytes. Both bounds are always checked.
pub fn length_section(policy: &PasswordPolicy, password: &str) -> LengthOutcome {
    let count = password.chars().count();
    LengthOutcome {
        meets_min: count >= policy.min_length(),
        meets_max: count <= policy.max_length(),
    }
}
