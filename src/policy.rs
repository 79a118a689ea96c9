//! Password policy - the caller-owned set of requirements.

use crate::sections::ClassRequirement;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 24;
pub const DEFAULT_REQUIRED_COUNT: i32 = 1;

/// Requirements a candidate password is checked against.
///
/// Built once with [`PasswordPolicy::default`], adjusted through the setters
/// and then reused for any number of evaluations. Setters never fail: values
/// out of range are coerced to the nearest legal value.
///
/// Evaluation borrows the policy immutably, so a policy cannot change while an
/// evaluation is running on it. Sharing one policy between threads works through
/// `&PasswordPolicy`; mutating a shared policy needs whatever synchronization the
/// caller picks (e.g. an `RwLock`), the policy itself holds no locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    required_upper: i32,
    required_lower: i32,
    required_digit: i32,
    required_special: i32,
    prohibited_patterns: Vec<String>,
    permit_prohibited_substring: bool,
    permit_prohibited_subsequence: bool,
    prohibited_patterns_ignore_case: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            required_upper: DEFAULT_REQUIRED_COUNT,
            required_lower: DEFAULT_REQUIRED_COUNT,
            required_digit: DEFAULT_REQUIRED_COUNT,
            required_special: DEFAULT_REQUIRED_COUNT,
            prohibited_patterns: Vec::new(),
            permit_prohibited_substring: false,
            permit_prohibited_subsequence: false,
            prohibited_patterns_ignore_case: true,
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every requirement to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Sets the minimum length. Values below 1 become 1.
    ///
    /// The maximum length is not re-checked here, only when it is assigned.
    pub fn set_min_length(&mut self, value: i64) {
        self.min_length = usize::try_from(value).unwrap_or(0).max(1);
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Sets the maximum length. Values below the current minimum length
    /// become the minimum length.
    pub fn set_max_length(&mut self, value: i64) {
        self.max_length = usize::try_from(value)
            .unwrap_or(0)
            .max(self.min_length);
    }

    /// Required uppercase count: negative = optional, 0 = forbidden,
    /// positive = at least that many.
    pub fn required_upper(&self) -> i32 {
        self.required_upper
    }

    pub fn set_required_upper(&mut self, value: i32) {
        self.required_upper = value;
    }

    /// Required lowercase count, same tri-state as [`Self::required_upper`].
    pub fn required_lower(&self) -> i32 {
        self.required_lower
    }

    pub fn set_required_lower(&mut self, value: i32) {
        self.required_lower = value;
    }

    /// Required digit count, same tri-state as [`Self::required_upper`].
    pub fn required_digit(&self) -> i32 {
        self.required_digit
    }

    pub fn set_required_digit(&mut self, value: i32) {
        self.required_digit = value;
    }

    /// Required special character count (neither letter nor digit),
    /// same tri-state as [`Self::required_upper`].
    pub fn required_special(&self) -> i32 {
        self.required_special
    }

    pub fn set_required_special(&mut self, value: i32) {
        self.required_special = value;
    }

    pub(crate) fn upper_requirement(&self) -> ClassRequirement {
        ClassRequirement::from_count(self.required_upper)
    }

    pub(crate) fn lower_requirement(&self) -> ClassRequirement {
        ClassRequirement::from_count(self.required_lower)
    }

    pub(crate) fn digit_requirement(&self) -> ClassRequirement {
        ClassRequirement::from_count(self.required_digit)
    }

    pub(crate) fn special_requirement(&self) -> ClassRequirement {
        ClassRequirement::from_count(self.required_special)
    }

    /// Prohibited patterns, in the order they are scanned.
    pub fn prohibited_patterns(&self) -> &[String] {
        &self.prohibited_patterns
    }

    /// Replaces the prohibited patterns.
    ///
    /// `None` leaves the current list untouched; `Some(vec![])` clears it.
    pub fn set_prohibited_patterns(&mut self, patterns: Option<Vec<String>>) {
        if let Some(patterns) = patterns {
            self.prohibited_patterns = patterns;
        }
    }

    pub fn permit_prohibited_substring(&self) -> bool {
        self.permit_prohibited_substring
    }

    /// When `true` the prohibited substring check is skipped.
    pub fn set_permit_prohibited_substring(&mut self, value: bool) {
        self.permit_prohibited_substring = value;
    }

    pub fn permit_prohibited_subsequence(&self) -> bool {
        self.permit_prohibited_subsequence
    }

    /// When `true` the prohibited subsequence check is skipped.
    pub fn set_permit_prohibited_subsequence(&mut self, value: bool) {
        self.permit_prohibited_subsequence = value;
    }

    pub fn prohibited_patterns_ignore_case(&self) -> bool {
        self.prohibited_patterns_ignore_case
    }

    pub fn set_prohibited_patterns_ignore_case(&mut self, value: bool) {
        self.prohibited_patterns_ignore_case = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length(), 8);
        assert_eq!(policy.max_length(), 24);
        assert_eq!(policy.required_upper(), 1);
        assert_eq!(policy.required_lower(), 1);
        assert_eq!(policy.required_digit(), 1);
        assert_eq!(policy.required_special(), 1);
        assert!(policy.prohibited_patterns().is_empty());
        assert!(!policy.permit_prohibited_substring());
        assert!(!policy.permit_prohibited_subsequence());
        assert!(policy.prohibited_patterns_ignore_case());
    }

    #[test]
    fn test_min_length_clamped_to_one() {
        let mut policy = PasswordPolicy::new();
        policy.set_min_length(-5);
        assert_eq!(policy.min_length(), 1);
        policy.set_min_length(0);
        assert_eq!(policy.min_length(), 1);
        policy.set_min_length(12);
        assert_eq!(policy.min_length(), 12);
    }

    #[test]
    fn test_max_length_clamped_to_current_min() {
        let mut policy = PasswordPolicy::new();
        policy.set_min_length(-5);
        policy.set_max_length(0);
        assert_eq!(policy.max_length(), 1);

        policy.set_min_length(10);
        policy.set_max_length(4);
        assert_eq!(policy.max_length(), 10);
    }

    #[test]
    fn test_raising_min_length_does_not_touch_max_length() {
        let mut policy = PasswordPolicy::new();
        policy.set_max_length(12);
        policy.set_min_length(20);
        assert_eq!(policy.min_length(), 20);
        assert_eq!(policy.max_length(), 12);
    }

    #[test]
    fn test_prohibited_patterns_none_keeps_previous() {
        let mut policy = PasswordPolicy::new();
        policy.set_prohibited_patterns(Some(vec!["admin".to_string()]));
        policy.set_prohibited_patterns(None);
        assert_eq!(policy.prohibited_patterns(), ["admin".to_string()]);

        policy.set_prohibited_patterns(Some(Vec::new()));
        assert!(policy.prohibited_patterns().is_empty());
    }

    #[test]
    fn test_required_counts_are_stored_as_given() {
        let mut policy = PasswordPolicy::new();
        policy.set_required_upper(-1);
        policy.set_required_lower(0);
        policy.set_required_digit(3);
        policy.set_required_special(-42);
        assert_eq!(policy.required_upper(), -1);
        assert_eq!(policy.required_lower(), 0);
        assert_eq!(policy.required_digit(), 3);
        assert_eq!(policy.required_special(), -42);
        assert_eq!(policy.upper_requirement(), ClassRequirement::Optional);
        assert_eq!(policy.lower_requirement(), ClassRequirement::Forbidden);
        assert_eq!(policy.digit_requirement(), ClassRequirement::AtLeast(3));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut policy = PasswordPolicy::new();
        policy.set_min_length(3);
        policy.set_required_digit(5);
        policy.set_prohibited_patterns(Some(vec!["qwerty".to_string()]));
        policy.set_permit_prohibited_substring(true);
        policy.set_prohibited_patterns_ignore_case(false);

        policy.reset();
        assert_eq!(policy, PasswordPolicy::default());
    }
}
