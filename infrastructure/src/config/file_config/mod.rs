//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod output;

pub use analysis::FileAnalysisConfig;
pub use output::FileOutputConfig;

use sensemaker_application::AnalyzeInput;
use sensemaker_domain::{ConfigIssue, GroupedConfig, MajorityConfig};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Policy selection and report scope
    pub analysis: FileAnalysisConfig,
    /// Group-informed policy thresholds
    pub grouped: GroupedConfig,
    /// Majority policy thresholds
    pub majority: MajorityConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The policy name parses
    /// 2. Both policies' thresholds are usable
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Enum parse validation
        issues.extend(self.analysis.parse_policy().1);

        // 2. Threshold validation
        issues.extend(self.grouped.validate());
        issues.extend(self.majority.validate());

        issues
    }

    /// Build the use case input, falling back to the default policy on an unknown name
    pub fn analyze_input(&self) -> AnalyzeInput {
        let mut input = AnalyzeInput::new(self.analysis.parse_policy().0)
            .with_grouped(self.grouped.clone())
            .with_majority(self.majority.clone())
            .with_topics(self.analysis.include_topics);
        input.sample_size = self.analysis.sample_size;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensemaker_domain::{ConfigIssueCode, OutputFormat, Severity, SummarizationType};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[analysis]
policy = "majority"
include_topics = false
sample_size = 3

[grouped]
min_common_ground_prob = 0.7
min_vote_count = 10

[majority]
min_difference_prob = 0.35
include_passes = true

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analysis.parse_policy().0, SummarizationType::AggregateVote);
        assert!(!config.analysis.include_topics);
        assert_eq!(config.analysis.sample_size, Some(3));
        assert_eq!(config.grouped.min_common_ground_prob, 0.7);
        assert_eq!(config.grouped.min_vote_count, 10);
        // Unset fields keep their defaults
        assert_eq!(config.grouped.min_agree_prob_difference, 0.15);
        assert_eq!(config.majority.min_difference_prob, 0.35);
        assert_eq!(config.majority.max_difference_prob, 0.6);
        assert!(config.majority.include_passes);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[majority]
uncertainty_buffer = 0.1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.majority.uncertainty_buffer, 0.1);
        assert_eq!(config.analysis, FileAnalysisConfig::default());
        assert_eq!(config.grouped, GroupedConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_analyze_input() {
        let toml_str = r#"
[analysis]
policy = "majority"
include_topics = false
sample_size = 4

[majority]
min_vote_count = 12
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let input = config.analyze_input();
        assert_eq!(input.summarization, SummarizationType::AggregateVote);
        assert!(!input.include_topics);
        assert_eq!(input.sample_size, Some(4));
        assert_eq!(input.majority.min_vote_count, 12);
        assert_eq!(input.grouped, GroupedConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_section() {
        let toml_str = r#"
[analysis]
policy = "unanimous"

[grouped]
min_common_ground_prob = 1.5

[majority]
min_difference_prob = 0.7
max_difference_prob = 0.3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert!(issues.iter().any(|i| matches!(
            i.code,
            ConfigIssueCode::InvalidEnumValue { .. }
        ) && i.severity == Severity::Warning));
        assert!(issues.iter().any(|i| matches!(
            i.code,
            ConfigIssueCode::ProbabilityOutOfRange { .. }
        )));
        assert!(issues.iter().any(|i| matches!(
            i.code,
            ConfigIssueCode::InvertedRange { .. }
        )));
        assert!(ConfigIssue::has_errors(&issues));
    }
}
