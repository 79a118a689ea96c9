//! Password policy evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::policy::PasswordPolicy;
use crate::result::EvaluationResult;
use crate::sections::{
    character_variety_section, length_section, prohibited_subsequence_section,
    prohibited_substring_section, structure_section,
};

impl PasswordPolicy {
    /// Checks a password against every requirement of this policy.
    ///
    /// # Arguments
    /// * `password` - The password to check, `None` if the caller has none
    ///
    /// # Returns
    /// A fresh `EvaluationResult`; evaluation never fails.
    pub fn evaluate(&self, password: Option<&SecretString>) -> EvaluationResult {
        self.evaluate_str(password.map(|p| p.expose_secret()))
    }

    /// Same as [`PasswordPolicy::evaluate`] for a plain string.
    pub fn evaluate_str(&self, password: Option<&str>) -> EvaluationResult {
        let pwd = match password {
            Some(pwd) if structure_section(password) => pwd,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Password rejected: missing or contains a backslash");
                return EvaluationResult::malformed();
            }
        };

        let length = length_section(self, pwd);
        let variety = character_variety_section(self, pwd);
        let substring = prohibited_substring_section(self, pwd);
        let subsequence = prohibited_subsequence_section(self, pwd);

        let result = EvaluationResult {
            meets_min_length: length.meets_min,
            meets_max_length: length.meets_max,
            meets_upper: variety.meets_upper,
            meets_lower: variety.meets_lower,
            meets_digit: variety.meets_digit,
            meets_special: variety.meets_special,
            meets_substring_rule: substring.is_none(),
            meets_subsequence_rule: subsequence.is_none(),
            found_prohibited_substring: substring.map(str::to_string),
            found_prohibited_subsequence: subsequence.map(str::to_string),
            ..EvaluationResult::default()
        }
        .finish();

        #[cfg(feature = "tracing")]
        {
            let failed: Vec<_> = result.failed().iter().map(|r| r.as_str()).collect();
            tracing::debug!(overall = result.overall(), failed = ?failed, "password evaluated");
        }

        result
    }
}

/// Async helper that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    policy: &PasswordPolicy,
    password: &SecretString,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let evaluation = policy.evaluate(Some(password));

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let policy = PasswordPolicy::default();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(&policy, &pwd, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.overall());
    }

    #[tokio::test]
    async fn test_evaluate_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let policy = PasswordPolicy::default();
        let pwd = SecretString::new("short".to_string().into());

        // must not panic when nobody is listening
        evaluate_tx(&policy, &pwd, tx).await;
    }
}
