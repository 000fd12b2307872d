//! Analyzer client - the one outbound call to the sentiment service
//!
//! Service contract: POST {"text": ...} to the endpoint, response is a JSON
//! array of {"policy", "score"} entries. Anything else is an error the
//! caller logs; no retries, and no state change on failure.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AnalyzerError;
use crate::policy::Policy;

/// One per-policy score returned by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub policy: String,
    pub score: i32,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// HTTP client for the sentiment-analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzerClient {
    /// Build a client for the given endpoint. A `timeout_secs` of 0 leaves
    /// requests unbounded.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, AnalyzerError> {
        let mut builder = reqwest::Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a statement for analysis and parse the per-policy scores.
    pub async fn analyze(&self, text: &str) -> Result<Vec<SentimentScore>, AnalyzerError> {
        debug!(endpoint = %self.endpoint, "submitting statement for analysis");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzerError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Check whether anything answers HTTP at the endpoint. Any response
    /// counts, including 405 from services that only accept POST.
    pub async fn probe(&self) -> bool {
        let client = match reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
        {
            Ok(client) => client,
            Err(_) => return false,
        };

        client.get(&self.endpoint).send().await.is_ok()
    }
}

/// Overwrite each policy's slider value from the analyzer's scores.
///
/// Matching is case-insensitive on the policy name; the first matching
/// entry wins. Policies without a matching entry are reset to 0. Scores
/// are applied verbatim, without range validation.
pub fn apply_scores(policies: &mut [Policy], scores: &[SentimentScore]) {
    for policy in policies.iter_mut() {
        let name = policy.name.to_lowercase();
        policy.user_choice = scores
            .iter()
            .find(|s| s.policy.to_lowercase() == name)
            .map(|s| s.score)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::seed_policies;

    fn score(policy: &str, value: i32) -> SentimentScore {
        SentimentScore {
            policy: policy.to_string(),
            score: value,
        }
    }

    #[test]
    fn scores_match_case_insensitively() {
        let mut policies = seed_policies();
        apply_scores(&mut policies, &[score("gun-control", 42)]);
        assert_eq!(policies[2].user_choice, 42);
        assert_eq!(policies[0].user_choice, 0);
        assert_eq!(policies[1].user_choice, 0);
    }

    #[test]
    fn unmatched_policies_reset_to_neutral() {
        let mut policies = seed_policies();
        policies[0].user_choice = 77;
        policies[1].user_choice = -30;
        apply_scores(&mut policies, &[score("Gun-Control", 10)]);
        assert_eq!(policies[0].user_choice, 0);
        assert_eq!(policies[1].user_choice, 0);
        assert_eq!(policies[2].user_choice, 10);
    }

    #[test]
    fn first_duplicate_entry_wins() {
        let mut policies = seed_policies();
        apply_scores(
            &mut policies,
            &[score("Pro-Choice", 10), score("pro-choice", 20)],
        );
        assert_eq!(policies[0].user_choice, 10);
    }

    #[test]
    fn out_of_range_scores_are_applied_verbatim() {
        let mut policies = seed_policies();
        apply_scores(&mut policies, &[score("Pro-Choice", 250)]);
        assert_eq!(policies[0].user_choice, 250);
    }

    #[test]
    fn wire_format_decodes() {
        let scores: Vec<SentimentScore> =
            serde_json::from_str(r#"[{"policy":"Gun-Control","score":42}]"#)
                .expect("decode score array");
        assert_eq!(scores, vec![score("Gun-Control", 42)]);
    }
}
