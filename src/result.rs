//! Evaluation result - per-requirement verdicts for one candidate.

use std::fmt;

/// Every requirement reported by an evaluation, in summary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    WellFormed,
    MinLength,
    MaxLength,
    Upper,
    Lower,
    Digit,
    Special,
    Substring,
    Subsequence,
    Overall,
}

impl Requirement {
    /// Index order of [`AllMeets::to_array`].
    pub const ALL: [Requirement; 10] = [
        Requirement::WellFormed,
        Requirement::MinLength,
        Requirement::MaxLength,
        Requirement::Upper,
        Requirement::Lower,
        Requirement::Digit,
        Requirement::Special,
        Requirement::Substring,
        Requirement::Subsequence,
        Requirement::Overall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Requirement::WellFormed => "well_formed",
            Requirement::MinLength => "min_length",
            Requirement::MaxLength => "max_length",
            Requirement::Upper => "upper",
            Requirement::Lower => "lower",
            Requirement::Digit => "digit",
            Requirement::Special => "special",
            Requirement::Substring => "substring",
            Requirement::Subsequence => "subsequence",
            Requirement::Overall => "overall",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat summary of an evaluation: the nine requirement flags followed by the
/// overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllMeets {
    pub well_formed: bool,
    pub min_length: bool,
    pub max_length: bool,
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
    pub substring: bool,
    pub subsequence: bool,
    pub overall: bool,
}

impl AllMeets {
    /// Same values as an array, indexed as [`Requirement::ALL`].
    pub fn to_array(self) -> [bool; 10] {
        [
            self.well_formed,
            self.min_length,
            self.max_length,
            self.upper,
            self.lower,
            self.digit,
            self.special,
            self.substring,
            self.subsequence,
            self.overall,
        ]
    }

    pub fn get(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::WellFormed => self.well_formed,
            Requirement::MinLength => self.min_length,
            Requirement::MaxLength => self.max_length,
            Requirement::Upper => self.upper,
            Requirement::Lower => self.lower,
            Requirement::Digit => self.digit,
            Requirement::Special => self.special,
            Requirement::Substring => self.substring,
            Requirement::Subsequence => self.subsequence,
            Requirement::Overall => self.overall,
        }
    }
}

/// Outcome of checking one candidate against a [`PasswordPolicy`](crate::PasswordPolicy).
///
/// Every flag starts out passing. When the candidate is not well formed the
/// remaining checks never run and their flags stay at that default, while
/// `overall` is still `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub(crate) well_formed: bool,
    pub(crate) meets_min_length: bool,
    pub(crate) meets_max_length: bool,
    pub(crate) meets_upper: bool,
    pub(crate) meets_lower: bool,
    pub(crate) meets_digit: bool,
    pub(crate) meets_special: bool,
    pub(crate) meets_substring_rule: bool,
    pub(crate) meets_subsequence_rule: bool,
    pub(crate) found_prohibited_substring: Option<String>,
    pub(crate) found_prohibited_subsequence: Option<String>,
    pub(crate) overall: bool,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self {
            well_formed: true,
            meets_min_length: true,
            meets_max_length: true,
            meets_upper: true,
            meets_lower: true,
            meets_digit: true,
            meets_special: true,
            meets_substring_rule: true,
            meets_subsequence_rule: true,
            found_prohibited_substring: None,
            found_prohibited_subsequence: None,
            overall: true,
        }
    }
}

impl EvaluationResult {
    /// Result for a candidate rejected by the structure check.
    pub(crate) fn malformed() -> Self {
        Self {
            well_formed: false,
            overall: false,
            ..Self::default()
        }
    }

    /// Recomputes `overall` from the individual flags.
    pub(crate) fn finish(mut self) -> Self {
        self.overall = self.well_formed
            && self.meets_min_length
            && self.meets_max_length
            && self.meets_upper
            && self.meets_lower
            && self.meets_digit
            && self.meets_special
            && self.meets_substring_rule
            && self.meets_subsequence_rule;
        self
    }

    /// `false` if the candidate was absent or contained a backslash.
    pub fn well_formed(&self) -> bool {
        self.well_formed
    }

    pub fn meets_min_length(&self) -> bool {
        self.meets_min_length
    }

    pub fn meets_max_length(&self) -> bool {
        self.meets_max_length
    }

    pub fn meets_upper(&self) -> bool {
        self.meets_upper
    }

    pub fn meets_lower(&self) -> bool {
        self.meets_lower
    }

    pub fn meets_digit(&self) -> bool {
        self.meets_digit
    }

    pub fn meets_special(&self) -> bool {
        self.meets_special
    }

    pub fn meets_substring_rule(&self) -> bool {
        self.meets_substring_rule
    }

    pub fn meets_subsequence_rule(&self) -> bool {
        self.meets_subsequence_rule
    }

    /// First prohibited pattern found as a substring, as configured.
    pub fn found_prohibited_substring(&self) -> Option<&str> {
        self.found_prohibited_substring.as_deref()
    }

    /// First prohibited pattern found as a subsequence, as configured.
    pub fn found_prohibited_subsequence(&self) -> Option<&str> {
        self.found_prohibited_subsequence.as_deref()
    }

    /// `true` only if every requirement is met.
    pub fn overall(&self) -> bool {
        self.overall
    }

    pub fn all_meets(&self) -> AllMeets {
        AllMeets {
            well_formed: self.well_formed,
            min_length: self.meets_min_length,
            max_length: self.meets_max_length,
            upper: self.meets_upper,
            lower: self.meets_lower,
            digit: self.meets_digit,
            special: self.meets_special,
            substring: self.meets_substring_rule,
            subsequence: self.meets_subsequence_rule,
            overall: self.overall,
        }
    }

    /// Requirements that were not met, excluding [`Requirement::Overall`].
    pub fn failed(&self) -> Vec<Requirement> {
        let all = self.all_meets();
        Requirement::ALL
            .into_iter()
            .filter(|&r| r != Requirement::Overall && !all.get(r))
            .collect()
    }

    /// Human readable message for every failed requirement.
    pub fn reasons(&self) -> Vec<String> {
        self.failed()
            .into_iter()
            .map(|requirement| match requirement {
                Requirement::WellFormed => "Password is missing or contains a backslash".to_string(),
                Requirement::MinLength => "Password is shorter than the minimum length".to_string(),
                Requirement::MaxLength => "Password is longer than the maximum length".to_string(),
                Requirement::Upper => "Password does not meet the uppercase requirement".to_string(),
                Requirement::Lower => "Password does not meet the lowercase requirement".to_string(),
                Requirement::Digit => "Password does not meet the digit requirement".to_string(),
                Requirement::Special => {
                    "Password does not meet the special character requirement".to_string()
                }
                Requirement::Substring => format!(
                    "Password contains prohibited string \"{}\"",
                    self.found_prohibited_substring().unwrap_or_default()
                ),
                Requirement::Subsequence => format!(
                    "Password contains the letters of prohibited string \"{}\" in order",
                    self.found_prohibited_subsequence().unwrap_or_default()
                ),
                Requirement::Overall => String::new(),
            })
            .collect()
    }
}
