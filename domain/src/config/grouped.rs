//! Thresholds for the group-informed consensus policy

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Grouped policy thresholds
///
/// | Field | Default |
/// |-------|---------|
/// | `min_common_ground_prob` | 0.65 |
/// | `min_agree_prob_difference` | 0.15 |
/// | `min_uncertainty_prob` | 0.2 (raised by calibration) |
/// | `max_sample_size` | 10 |
/// | `min_vote_count` | 5 |
/// | `as_probability_estimate` | true |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedConfig {
    /// Every group's agree (or disagree) probability must reach this for common ground.
    pub min_common_ground_prob: f64,
    /// A group must differ from the rest by more than this to be representative.
    pub min_agree_prob_difference: f64,
    /// Floor for the calibrated uncertainty threshold.
    pub min_uncertainty_prob: f64,
    /// Default `k` for every selection.
    pub max_sample_size: usize,
    /// Comments with fewer votes (passes included) are ignored.
    pub min_vote_count: u64,
    /// Use Laplace-smoothed rates instead of raw ratios.
    pub as_probability_estimate: bool,
}

impl Default for GroupedConfig {
    fn default() -> Self {
        Self {
            min_common_ground_prob: 0.65,
            min_agree_prob_difference: 0.15,
            min_uncertainty_prob: 0.2,
            max_sample_size: 10,
            min_vote_count: 5,
            as_probability_estimate: true,
        }
    }
}

impl GroupedConfig {
    // ==================== Builder Methods ====================

    pub fn with_min_common_ground_prob(mut self, prob: f64) -> Self {
        self.min_common_ground_prob = prob;
        self
    }

    pub fn with_min_agree_prob_difference(mut self, difference: f64) -> Self {
        self.min_agree_prob_difference = difference;
        self
    }

    pub fn with_min_uncertainty_prob(mut self, prob: f64) -> Self {
        self.min_uncertainty_prob = prob;
        self
    }

    pub fn with_max_sample_size(mut self, size: usize) -> Self {
        self.max_sample_size = size;
        self
    }

    pub fn with_min_vote_count(mut self, count: u64) -> Self {
        self.min_vote_count = count;
        self
    }

    pub fn with_probability_estimate(mut self, enabled: bool) -> Self {
        self.as_probability_estimate = enabled;
        self
    }

    // ==================== Validation ====================

    pub fn validate(&self) -> Vec<ConfigIssue> {
        [
            ConfigIssue::probability("grouped.min_common_ground_prob", self.min_common_ground_prob),
            ConfigIssue::probability(
                "grouped.min_agree_prob_difference",
                self.min_agree_prob_difference,
            ),
            ConfigIssue::probability("grouped.min_uncertainty_prob", self.min_uncertainty_prob),
            ConfigIssue::sample_size("grouped.max_sample_size", self.max_sample_size),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
