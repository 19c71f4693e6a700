//! Analysis configuration from TOML (`[analysis]` section)

use sensemaker_domain::{ConfigIssue, ConfigIssueCode, Severity, SummarizationType};
use serde::{Deserialize, Serialize};

/// Raw analysis configuration from TOML
///
/// # Example
///
/// ```toml
/// [analysis]
/// policy = "group-informed"   # "group-informed" or "majority"
/// include_topics = true
/// sample_size = 5             # optional, defaults to the policy's max_sample_size
/// ```
///
/// Policy thresholds live in the `[grouped]` and `[majority]` sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Scoring policy: "group-informed" or "majority"
    pub policy: String,
    /// Break the analysis down by topic and subtopic
    pub include_topics: bool,
    /// Comments per category
    pub sample_size: Option<usize>,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            policy: SummarizationType::default().as_str().to_string(),
            include_topics: true,
            sample_size: None,
        }
    }
}

impl FileAnalysisConfig {
    /// Parse policy string into SummarizationType, returning warnings on failure.
    ///
    /// Accepts: "group-informed", "group_informed_consensus", "grouped",
    /// "majority", "aggregate_vote", "aggregate"
    pub fn parse_policy(&self) -> (SummarizationType, Vec<ConfigIssue>) {
        match self.policy.parse::<SummarizationType>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let fallback = SummarizationType::default();
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "analysis.policy".to_string(),
                        value: self.policy.clone(),
                        valid_values: vec!["group-informed".to_string(), "majority".to_string()],
                    },
                    message: format!(
                        "analysis.policy: unknown value '{}', falling back to '{}'",
                        self.policy, fallback
                    ),
                };
                (fallback, vec![issue])
            }
        }
    }
}
