//! Threshold configuration validation.
//!
//! Each policy configuration can check its own values and report structured
//! issues with severity levels. Callers decide whether to abort on errors.
//!
//! # Examples
//!
//! ```
//! use sensemaker_domain::config::{GroupedConfig, Severity};
//!
//! let issues = GroupedConfig::default().validate();
//! assert!(issues.is_empty());
//!
//! let broken = GroupedConfig::default().with_min_common_ground_prob(1.4);
//! assert_eq!(broken.validate()[0].severity, Severity::Error);
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the thresholds cannot produce meaningful selections.
    Error,
    /// Non-fatal: the analysis runs but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A probability threshold lies outside `[0, 1]`.
    ProbabilityOutOfRange { field: String, value: f64 },
    /// A lower bound is greater than its upper bound.
    InvertedRange { min_field: String, max_field: String },
    /// A sample size of zero selects nothing.
    EmptySample { field: String },
    /// A string field holds a value that does not parse.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in a configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub(crate) fn probability(field: &str, value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            return None;
        }
        Some(Self {
            severity: Severity::Error,
            code: ConfigIssueCode::ProbabilityOutOfRange {
                field: field.to_string(),
                value,
            },
            message: format!("{field}: {value} is not a probability (expected 0.0 to 1.0)"),
        })
    }

    pub(crate) fn inverted(min_field: &str, min: f64, max_field: &str, max: f64) -> Option<Self> {
        if min <= max {
            return None;
        }
        Some(Self {
            severity: Severity::Error,
            code: ConfigIssueCode::InvertedRange {
                min_field: min_field.to_string(),
                max_field: max_field.to_string(),
            },
            message: format!("{min_field} ({min}) is greater than {max_field} ({max})"),
        })
    }

    pub(crate) fn sample_size(field: &str, value: usize) -> Option<Self> {
        if value > 0 {
            return None;
        }
        Some(Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::EmptySample {
                field: field.to_string(),
            },
            message: format!("{field} is 0, every category will be empty"),
        })
    }

    /// Check whether any issue in the list is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_in_range_is_fine() {
        assert!(ConfigIssue::probability("p", 0.0).is_none());
        assert!(ConfigIssue::probability("p", 1.0).is_none());
        assert!(ConfigIssue::probability("p", 0.65).is_none());
    }

    #[test]
    fn probability_out_of_range_is_error() {
        let issue = ConfigIssue::probability("grouped.min_common_ground_prob", -0.1).unwrap();
        assert_eq!(issue.severity, Severity::Error);
        assert!(issue.message.contains("grouped.min_common_ground_prob"));
    }

    #[test]
    fn nan_probability_is_error() {
        assert!(ConfigIssue::probability("p", f64::NAN).is_some());
    }

    #[test]
    fn inverted_range_is_error() {
        assert!(ConfigIssue::inverted("min", 0.4, "max", 0.6).is_none());
        let issue = ConfigIssue::inverted("min", 0.7, "max", 0.6).unwrap();
        assert_eq!(
            issue.code,
            ConfigIssueCode::InvertedRange {
                min_field: "min".to_string(),
                max_field: "max".to_string()
            }
        );
    }

    #[test]
    fn zero_sample_size_warns() {
        let issue = ConfigIssue::sample_size("max_sample_size", 0).unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!ConfigIssue::has_errors(&[issue]));
    }
}
