//! Password policy sections
//!
//! Each section checks one group of requirements against the candidate.
//! Sections never fail: their outcome is plain data merged into the
//! [`EvaluationResult`](crate::EvaluationResult) by the evaluator.

mod length;
mod prohibited;
mod structure;
mod variety;

pub use length::length_section;
pub use prohibited::{is_subsequence, prohibited_subsequence_section, prohibited_substring_section};
pub use structure::structure_section;
pub use variety::{CharClass, ClassRequirement, character_variety_section};
