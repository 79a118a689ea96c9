//! Character variety section - counts uppercase, lowercase, digits, special chars.

use crate::policy::PasswordPolicy;

/// Character classes counted by the variety section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    /// Decimal digits `0-9` only; numerics such as `²` or `½` are special.
    Digit,
    /// Anything that is neither a letter nor a digit.
    Special,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Upper => c.is_uppercase(),
            CharClass::Lower => c.is_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => !c.is_alphabetic() && !c.is_ascii_digit(),
        }
    }

    pub fn count(self, password: &str) -> usize {
        password.chars().filter(|&c| self.matches(c)).count()
    }
}

/// Tri-state requirement decoded from a signed policy count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRequirement {
    /// Negative count: no constraint.
    Optional,
    /// Zero: the class must not appear.
    Forbidden,
    /// Positive count: at least this many, no upper cap.
    AtLeast(usize),
}

impl ClassRequirement {
    pub fn from_count(required: i32) -> Self {
        match usize::try_from(required) {
            Err(_) => ClassRequirement::Optional,
            Ok(0) => ClassRequirement::Forbidden,
            Ok(n) => ClassRequirement::AtLeast(n),
        }
    }

    pub fn is_met_by(self, count: usize) -> bool {
        match self {
            ClassRequirement::Optional => true,
            ClassRequirement::Forbidden => count == 0,
            ClassRequirement::AtLeast(n) => count >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarietyOutcome {
    pub meets_upper: bool,
    pub meets_lower: bool,
    pub meets_digit: bool,
    pub meets_special: bool,
}

/// Checks every character class against its policy requirement.
///
/// The four classes are checked independently of each other.
pub fn character_variety_section(policy: &PasswordPolicy, password: &str) -> VarietyOutcome {
    let meets =
        |class: CharClass, requirement: ClassRequirement| requirement.is_met_by(class.count(password));

    VarietyOutcome {
        meets_upper: meets(CharClass::Upper, policy.upper_requirement()),
        meets_lower: meets(CharClass::Lower, policy.lower_requirement()),
        meets_digit: meets(CharClass::Digit, policy.digit_requirement()),
        meets_special: meets(CharClass::Special, policy.special_requirement()),
    }
}
