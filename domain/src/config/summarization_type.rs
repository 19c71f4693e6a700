//! Summarization type value object

use crate::core::error::StatsError;
use serde::{Deserialize, Serialize};

/// Which scoring policy an analysis run uses
///
/// Chosen per run based on whether opinion-group segmentation is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarizationType {
    /// Consensus across opinion groups; needs per-group tallies
    #[default]
    GroupInformedConsensus,
    /// Simple majority over pooled totals; ignores groups
    AggregateVote,
}

impl SummarizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizationType::GroupInformedConsensus => "group-informed",
            SummarizationType::AggregateVote => "majority",
        }
    }

    /// Whether this policy reads per-group tallies
    pub fn uses_groups(&self) -> bool {
        matches!(self, SummarizationType::GroupInformedConsensus)
    }
}

impl std::fmt::Display for SummarizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SummarizationType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "group_informed" | "group_informed_consensus" | "grouped" => {
                Ok(SummarizationType::GroupInformedConsensus)
            }
            "majority" | "aggregate_vote" | "aggregate" => Ok(SummarizationType::AggregateVote),
            _ => Err(StatsError::UnknownSummarizationType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_group_informed() {
        assert_eq!(
            SummarizationType::default(),
            SummarizationType::GroupInformedConsensus
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "group-informed".parse::<SummarizationType>().ok(),
            Some(SummarizationType::GroupInformedConsensus)
        );
        assert_eq!(
            "GROUP_INFORMED_CONSENSUS".parse::<SummarizationType>().ok(),
            Some(SummarizationType::GroupInformedConsensus)
        );
        assert_eq!(
            "majority".parse::<SummarizationType>().ok(),
            Some(SummarizationType::AggregateVote)
        );
        assert_eq!(
            "aggregate-vote".parse::<SummarizationType>().ok(),
            Some(SummarizationType::AggregateVote)
        );
        assert!("ranked".parse::<SummarizationType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [
            SummarizationType::GroupInformedConsensus,
            SummarizationType::AggregateVote,
        ] {
            assert_eq!(kind.to_string().parse::<SummarizationType>().ok(), Some(kind));
        }
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&SummarizationType::AggregateVote).unwrap();
        assert_eq!(json, "\"aggregate_vote\"");
    }
}
