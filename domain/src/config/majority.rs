//! Thresholds for the majority-vote policy

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Majority policy thresholds
///
/// Groups are ignored; every rate is computed on pooled totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MajorityConfig {
    /// Agree (or disagree) rate needed for common ground.
    pub min_common_ground_prob: f64,
    /// Agree and disagree rates must both be at least this for a difference of opinion.
    pub min_difference_prob: f64,
    /// Agree and disagree rates must both be at most this for a difference of opinion.
    pub max_difference_prob: f64,
    /// Floor for the calibrated uncertainty threshold.
    pub min_uncertainty_prob: f64,
    /// Gap kept between uncertain comments and common ground / difference comments.
    pub uncertainty_buffer: f64,
    /// Count passes in the agree/disagree denominators.
    pub include_passes: bool,
    /// Use Laplace-smoothed rates instead of raw ratios.
    ///
    /// Off by default: the minimum vote count already keeps sparse comments out.
    pub as_probability_estimate: bool,
    /// Default `k` for every selection.
    pub max_sample_size: usize,
    /// Comments with fewer votes (passes included) are ignored.
    pub min_vote_count: u64,
}

impl Default for MajorityConfig {
    fn default() -> Self {
        Self {
            min_common_ground_prob: 0.7,
            min_difference_prob: 0.4,
            max_difference_prob: 0.6,
            min_uncertainty_prob: 0.2,
            uncertainty_buffer: 0.05,
            include_passes: false,
            as_probability_estimate: false,
            max_sample_size: 10,
            min_vote_count: 5,
        }
    }
}

impl MajorityConfig {
    // ==================== Builder Methods ====================

    pub fn with_min_common_ground_prob(mut self, prob: f64) -> Self {
        self.min_common_ground_prob = prob;
        self
    }

    pub fn with_difference_range(mut self, min: f64, max: f64) -> Self {
        self.min_difference_prob = min;
        self.max_difference_prob = max;
        self
    }

    pub fn with_min_uncertainty_prob(mut self, prob: f64) -> Self {
        self.min_uncertainty_prob = prob;
        self
    }

    pub fn with_uncertainty_buffer(mut self, buffer: f64) -> Self {
        self.uncertainty_buffer = buffer;
        self
    }

    pub fn with_include_passes(mut self, include: bool) -> Self {
        self.include_passes = include;
        self
    }

    pub fn with_probability_estimate(mut self, enabled: bool) -> Self {
        self.as_probability_estimate = enabled;
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

    // ==================== Validation ====================

    pub fn validate(&self) -> Vec<ConfigIssue> {
        [
            ConfigIssue::probability("majority.min_common_ground_prob", self.min_common_ground_prob),
            ConfigIssue::probability("majority.min_difference_prob", self.min_difference_prob),
            ConfigIssue::probability("majority.max_difference_prob", self.max_difference_prob),
            ConfigIssue::inverted(
                "majority.min_difference_prob",
                self.min_difference_prob,
                "majority.max_difference_prob",
                self.max_difference_prob,
            ),
            ConfigIssue::probability("majority.min_uncertainty_prob", self.min_uncertainty_prob),
            ConfigIssue::probability("majority.uncertainty_buffer", self.uncertainty_buffer),
            ConfigIssue::sample_size("majority.max_sample_size", self.max_sample_size),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
