//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Only caller mistakes are reported here. Missing data (an absent group, an
/// empty comment set, a zero vote total) resolves to a documented default
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A statistic that needs per-group tallies was asked of an ungrouped comment.
    #[error("Group information is required for calculating {statistic}")]
    GroupsRequired { statistic: &'static str },

    #[error("Unknown summarization type: {0}. Valid: group-informed, majority")]
    UnknownSummarizationType(String),
}

impl StatsError {
    pub(crate) fn groups_required(statistic: &'static str) -> Self {
        StatsError::GroupsRequired { statistic }
    }

    /// Check if this error comes from using the wrong policy for the data
    pub fn is_groups_required(&self) -> bool {
        matches!(self, StatsError::GroupsRequired { .. })
    }
}

/// Result alias used throughout the domain crate
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_required_display() {
        let error = StatsError::groups_required("group informed consensus");
        assert_eq!(
            error.to_string(),
            "Group information is required for calculating group informed consensus"
        );
        assert!(error.is_groups_required());
    }

    #[test]
    fn test_unknown_summarization_type_display() {
        let error = StatsError::UnknownSummarizationType("ranked".to_string());
        assert!(error.to_string().contains("ranked"));
        assert!(!error.is_groups_required());
    }
}
