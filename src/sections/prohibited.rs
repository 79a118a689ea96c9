//! Prohibited pattern section - finds configured patterns hidden in the password.
//!
//! Two searches share the same pattern list: contiguous substrings and
//! in-order subsequences. Both stop at the first offending pattern in list
//! order and report it in its configured (unfolded) form.

use std::borrow::Cow;

use crate::policy::PasswordPolicy;

/// Upper-cases a single char, keeping it as is when the upper case form
/// is more than one char (`ß` stays `ß`).
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Folds `value` to upper case when `ignore_case` is set.
///
/// Folding is char by char, so the folded string has as many chars as `value`.
pub fn fold_pattern_case(value: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case {
        Cow::Owned(value.chars().map(fold_char).collect())
    } else {
        Cow::Borrowed(value)
    }
}

/// Returns `true` if the characters of `pattern` appear in `haystack` in the
/// same order, not necessarily next to each other.
///
/// An empty pattern is a subsequence of every haystack.
pub fn is_subsequence(pattern: &str, haystack: &str) -> bool {
    let mut wanted = pattern.chars().peekable();
    if wanted.peek().is_none() {
        return true;
    }
    for c in haystack.chars() {
        if wanted.peek() == Some(&c) {
            wanted.next();
            if wanted.peek().is_none() {
                return true;
            }
        }
    }
    false
}

/// Scans the prohibited patterns for the first one matching `found`.
fn first_match<'p>(
    policy: &'p PasswordPolicy,
    password: &str,
    found: impl Fn(&str, &str) -> bool,
) -> Option<&'p str> {
    let ignore_case = policy.prohibited_patterns_ignore_case();
    let haystack = fold_pattern_case(password, ignore_case);

    policy
        .prohibited_patterns()
        .iter()
        .find(|pattern| found(&*fold_pattern_case(pattern, ignore_case), &*haystack))
        .map(String::as_str)
}

/// Looks for the first prohibited pattern contained in the password.
///
/// # Returns
/// - `Some(pattern)` with the offending pattern as configured
/// - `None` if nothing matched or substrings are permitted by the policy
pub fn prohibited_substring_section<'p>(
    policy: &'p PasswordPolicy,
    password: &str,
) -> Option<&'p str> {
    if policy.permit_prohibited_substring() {
        return None;
    }
    first_match(policy, password, |pattern, haystack| haystack.contains(pattern))
}

/// Looks for the first prohibited pattern whose characters appear in order
/// inside the password.
///
/// # Returns
/// - `Some(pattern)` with the offending pattern as configured
/// - `None` if nothing matched or subsequences are permitted by the policy
pub fn prohibited_subsequence_section<'p>(
    policy: &'p PasswordPolicy,
    password: &str,
) -> Option<&'p str> {
    if policy.permit_prohibited_subsequence() {
        return None;
    }
    first_match(policy, password, is_subsequence)
}
