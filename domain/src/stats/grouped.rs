//! Group-informed consensus policy
//!
//! Needs per-group tallies and rewards agreement that holds *across*
//! opinion groups. Comments without grouped vote info are dropped when the
//! engine is built.

use super::engine::{CommentPool, PoolOptions, SummaryStats};
use super::groups::{
    group_agree_prob_difference, group_informed_consensus, group_informed_disagree_consensus,
    max_group_agree_prob_difference, min_agree_prob, min_disagree_prob,
};
use super::rates::total_pass_rate;
use crate::comment::{Comment, CommentWithVoteInfo};
use crate::config::GroupedConfig;
use crate::core::error::Result;
use crate::core::format::decimal_to_percent;
use serde::{Deserialize, Serialize};

/// Votes cast by one opinion group across the filtered comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    pub name: String,
    pub vote_count: u64,
}

/// Summary statistics for group-based summarization
#[derive(Debug, Clone)]
pub struct GroupedSummaryStats {
    pool: CommentPool,
    config: GroupedConfig,
}

impl GroupedSummaryStats {
    /// Build with default thresholds
    pub fn new(comments: Vec<Comment>) -> Self {
        Self::with_config(comments, GroupedConfig::default())
    }

    pub fn with_config(comments: Vec<Comment>, config: GroupedConfig) -> Self {
        let options = PoolOptions {
            min_vote_count: config.min_vote_count,
            require_groups: true,
            as_probability_estimate: config.as_probability_estimate,
            min_uncertainty_prob: config.min_uncertainty_prob,
        };
        Self {
            pool: CommentPool::new(comments, &options),
            config,
        }
    }

    pub fn config(&self) -> &GroupedConfig {
        &self.config
    }

    /// Every group agrees with at least `min_common_ground_prob`
    pub fn meets_common_ground_agree_threshold(&self, comment: &CommentWithVoteInfo) -> Result<bool> {
        Ok(min_agree_prob(comment, self.config.as_probability_estimate)?
            >= self.config.min_common_ground_prob)
    }

    /// Every group disagrees with at least `min_common_ground_prob`
    pub fn meets_common_ground_disagree_threshold(
        &self,
        comment: &CommentWithVoteInfo,
    ) -> Result<bool> {
        Ok(min_disagree_prob(comment, self.config.as_probability_estimate)?
            >= self.config.min_common_ground_prob)
    }

    fn lacks_common_agreement(&self, comment: &CommentWithVoteInfo) -> Result<bool> {
        Ok(!self.meets_common_ground_agree_threshold(comment)?)
    }

    /// Comments that `group` agrees with distinctly more than everyone else
    ///
    /// Only comments without cross-group agreement are considered.
    pub fn get_group_representative_comments(
        &self,
        group: &str,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        let difference = |c: &CommentWithVoteInfo| {
            group_agree_prob_difference(c, group, self.config.as_probability_estimate)
        };
        self.top_k(&difference, k, |c| {
            Ok(self.lacks_common_agreement(c)?
                && difference(c)? > self.config.min_agree_prob_difference)
        })
    }

    /// Votes per opinion group (passes included), in first-seen order
    pub fn get_stats_by_group(&self) -> Vec<GroupStats> {
        let mut stats: Vec<GroupStats> = Vec::new();
        for comment in self.filtered_comments() {
            let Some(groups) = comment.vote_info.as_groups() else {
                continue;
            };
            for (name, tally) in groups {
                let votes = tally.total_count(true);
                match stats.iter_mut().find(|s| &s.name == name) {
                    Some(existing) => {
                        existing.vote_count = existing.vote_count.saturating_add(votes)
                    }
                    None => stats.push(GroupStats {
                        name: name.clone(),
                        vote_count: votes,
                    }),
                }
            }
        }
        stats
    }
}

impl SummaryStats for GroupedSummaryStats {
    fn create(&self, comments: Vec<Comment>) -> Self {
        Self::with_config(comments, self.config.clone())
    }

    fn pool(&self) -> &CommentPool {
        &self.pool
    }

    fn max_sample_size(&self) -> usize {
        self.config.max_sample_size
    }

    fn min_vote_count(&self) -> u64 {
        self.config.min_vote_count
    }

    fn get_common_ground_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        Ok(self
            .get_common_ground_agree_score(comment)?
            .max(self.get_common_ground_disagree_score(comment)?))
    }

    fn get_common_ground_comments(&self, k: Option<usize>) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_common_ground_score(c),
            k,
            |c| {
                Ok(self.meets_common_ground_agree_threshold(c)?
                    || self.meets_common_ground_disagree_threshold(c)?)
            },
        )
    }

    fn get_common_ground_agree_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        group_informed_consensus(comment)
    }

    fn get_common_ground_agree_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_common_ground_agree_score(c),
            k,
            |c| self.meets_common_ground_agree_threshold(c),
        )
    }

    fn get_common_ground_disagree_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        group_informed_disagree_consensus(comment, self.config.as_probability_estimate)
    }

    fn get_common_ground_disagree_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_common_ground_disagree_score(c),
            k,
            |c| self.meets_common_ground_disagree_threshold(c),
        )
    }

    fn get_common_ground_no_comments_message(&self) -> String {
        format!(
            "No statements met the thresholds necessary to be considered as a point of common \
             ground (at least {} votes, and at least {} agreement across groups).",
            self.config.min_vote_count,
            decimal_to_percent(self.config.min_common_ground_prob)
        )
    }

    fn get_difference_of_opinion_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        max_group_agree_prob_difference(comment)
    }

    fn get_difference_of_opinion_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_difference_of_opinion_score(c),
            k,
            |c| {
                Ok(self.lacks_common_agreement(c)?
                    && self.get_difference_of_opinion_score(c)?
                        > self.config.min_agree_prob_difference)
            },
        )
    }

    fn get_differences_of_opinion_no_comments_message(&self) -> String {
        format!(
            "No statements met the thresholds necessary to be considered as a significant \
             difference of opinion (at least {} votes, and more than {} difference in agreement \
             rate between groups).",
            self.config.min_vote_count,
            decimal_to_percent(self.config.min_agree_prob_difference)
        )
    }

    fn get_uncertain_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        Ok(total_pass_rate(
            &comment.vote_info,
            self.config.as_probability_estimate,
        ))
    }

    fn get_uncertain_comments(&self, k: Option<usize>) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_uncertain_score(c),
            k,
            |c| Ok(self.get_uncertain_score(c)? > self.min_uncertainty_prob()),
        )
    }
}
