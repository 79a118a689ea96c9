//! Password policy compliance library
//!
//! This library checks a password against a caller-supplied policy and
//! reports, requirement by requirement, what failed.
//!
//! # Features
//!
//! - `async` (default): Enables sending evaluations over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PROHIBITED_PATTERNS_PATH`: Custom path to a prohibited patterns file
//!   (default: `./assets/prohibited.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::PasswordPolicy;
//! use secrecy::SecretString;
//!
//! let mut policy = PasswordPolicy::default();
//! policy.set_required_digit(2);
//! policy.set_prohibited_patterns(Some(vec!["admin".to_string()]));
//!
//! let password = SecretString::new("MyADMINp@ss1".to_string().into());
//! let evaluation = policy.evaluate(Some(&password));
//!
//! assert!(!evaluation.overall());
//! assert!(!evaluation.meets_digit());
//! assert_eq!(evaluation.found_prohibited_substring(), Some("admin"));
//! ```

// Internal modules
mod evaluator;
mod patterns;
mod policy;
mod result;
mod sections;

// Public API
pub use patterns::{
    PATTERNS_PATH_ENV, PatternsError, load_prohibited_patterns, load_prohibited_patterns_from_path,
    prohibited_patterns_path,
};
pub use policy::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_REQUIRED_COUNT, PasswordPolicy};
pub use result::{AllMeets, EvaluationResult, Requirement};
pub use sections::{CharClass, ClassRequirement, is_subsequence};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
