//! Summary statistics engine
//!
//! [`SummaryStats`] is the contract both scoring policies implement. The
//! data handling they share (vote-count filtering, uncertainty calibration,
//! top-k selection, topic aggregation) lives here; each policy only brings
//! its own scores and eligibility rules.
//!
//! # Example
//!
//! ```
//! use sensemaker_domain::{Comment, MajoritySummaryStats, SummaryStats, VoteTally};
//!
//! let comments = vec![
//!     Comment::new("1", "Keep the library open late").with_votes(VoteTally::new(18, 2)),
//!     Comment::new("2", "Close the library on Sundays").with_votes(VoteTally::new(9, 11)),
//!     Comment::new("3", "Too few votes").with_votes(VoteTally::new(2, 1)),
//! ];
//!
//! let stats = MajoritySummaryStats::new(comments);
//! assert_eq!(stats.filtered_comments().len(), 2);
//!
//! let common_ground = stats.get_common_ground_comments(None).unwrap();
//! assert_eq!(common_ground[0].id, "1");
//! ```

use super::rates::total_pass_rate;
use super::topics::{self, TopicStats};
use crate::comment::{Comment, CommentWithVoteInfo};
use crate::core::error::Result;

/// Quantile of the pass-rate distribution used to calibrate uncertainty.
pub const UNCERTAINTY_QUANTILE: f64 = 0.75;

/// Quantile of `values` with linear interpolation between neighbouring ranks
///
/// Returns `0.0` for an empty slice.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let index = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    let fraction = index - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Filtering options handed to [`CommentPool::new`] by each policy
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    /// Minimum votes (passes included) for a comment to be scored
    pub min_vote_count: u64,
    /// Drop comments whose vote info is not per-group
    pub require_groups: bool,
    /// Rate form used when calibrating the uncertainty threshold
    pub as_probability_estimate: bool,
    /// Configured uncertainty floor
    pub min_uncertainty_prob: f64,
}

/// Input comments plus the subset a policy may score
///
/// Built once per engine instance and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CommentPool {
    comments: Vec<Comment>,
    filtered: Vec<CommentWithVoteInfo>,
    min_uncertainty_prob: f64,
}

impl CommentPool {
    /// Filter `comments` and calibrate the uncertainty threshold
    ///
    /// A comment is kept if it has vote info of the required shape (a
    /// non-empty group mapping when groups are required) and at
    /// least `min_vote_count` votes. Input order is preserved. The working
    /// uncertainty threshold is the larger of the configured floor and the
    /// 75th percentile of the kept comments' pass rates.
    pub fn new(comments: Vec<Comment>, options: &PoolOptions) -> Self {
        let filtered: Vec<CommentWithVoteInfo> = comments
            .iter()
            .filter_map(Comment::with_vote_info)
            .filter(|c| !options.require_groups || c.vote_info.has_groups())
            .filter(|c| c.vote_count(true) >= options.min_vote_count)
            .collect();

        let pass_rates: Vec<f64> = filtered
            .iter()
            .map(|c| total_pass_rate(&c.vote_info, options.as_probability_estimate))
            .collect();
        let min_uncertainty_prob = options
            .min_uncertainty_prob
            .max(quantile(&pass_rates, UNCERTAINTY_QUANTILE));

        Self {
            comments,
            filtered,
            min_uncertainty_prob,
        }
    }

    /// Every input comment, filtered or not
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments eligible for scoring, in input order
    pub fn filtered(&self) -> &[CommentWithVoteInfo] {
        &self.filtered
    }

    /// Calibrated uncertainty threshold
    pub fn min_uncertainty_prob(&self) -> f64 {
        self.min_uncertainty_prob
    }
}

/// Scoring and selection contract shared by the grouped and majority policies
///
/// Every `get_*_comments` method is [`SummaryStats::top_k`] with a
/// policy-specific score and filter. `k = None` means the policy's
/// `max_sample_size`.
pub trait SummaryStats: Sized {
    /// A new instance of the same policy, with the same configuration, over `comments`
    fn create(&self, comments: Vec<Comment>) -> Self;

    /// Filtered and unfiltered comments of this instance
    fn pool(&self) -> &CommentPool;

    /// Default number of comments returned by a selection
    fn max_sample_size(&self) -> usize;

    /// Minimum votes for a comment to be scored
    fn min_vote_count(&self) -> u64;

    // ==================== Common ground ====================

    fn get_common_ground_score(&self, comment: &CommentWithVoteInfo) -> Result<f64>;

    fn get_common_ground_comments(&self, k: Option<usize>) -> Result<Vec<CommentWithVoteInfo>>;

    fn get_common_ground_agree_score(&self, comment: &CommentWithVoteInfo) -> Result<f64>;

    fn get_common_ground_agree_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>>;

    fn get_common_ground_disagree_score(&self, comment: &CommentWithVoteInfo) -> Result<f64>;

    fn get_common_ground_disagree_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>>;

    /// Explanation shown when no comment qualifies as common ground
    fn get_common_ground_no_comments_message(&self) -> String;

    // ==================== Difference of opinion ====================

    fn get_difference_of_opinion_score(&self, comment: &CommentWithVoteInfo) -> Result<f64>;

    fn get_difference_of_opinion_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>>;

    /// Explanation shown when no comment qualifies as a difference of opinion
    fn get_differences_of_opinion_no_comments_message(&self) -> String;

    // ==================== Uncertainty ====================

    fn get_uncertain_score(&self, comment: &CommentWithVoteInfo) -> Result<f64>;

    fn get_uncertain_comments(&self, k: Option<usize>) -> Result<Vec<CommentWithVoteInfo>>;

    // ==================== Provided ====================

    fn comments(&self) -> &[Comment] {
        self.pool().comments()
    }

    fn filtered_comments(&self) -> &[CommentWithVoteInfo] {
        self.pool().filtered()
    }

    /// Calibrated uncertainty threshold
    fn min_uncertainty_prob(&self) -> f64 {
        self.pool().min_uncertainty_prob()
    }

    /// Total votes (passes included) across every input comment, saturating at `u64::MAX`
    fn vote_count(&self) -> u64 {
        self.comments()
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.vote_count(true)))
    }

    /// Number of input comments
    fn comment_count(&self) -> usize {
        self.comments().len()
    }

    /// Whether any comment carries a topic with subtopics
    fn contains_subtopics(&self) -> bool {
        self.comments()
            .iter()
            .flat_map(Comment::topics)
            .any(|topic| topic.has_subtopics())
    }

    /// The `k` highest-scoring filtered comments that pass `filter`
    ///
    /// The sort is stable: equal scores keep their input order. The first
    /// error from `score` or `filter` is returned as is.
    fn top_k<S, F>(&self, score: S, k: Option<usize>, filter: F) -> Result<Vec<CommentWithVoteInfo>>
    where
        S: Fn(&CommentWithVoteInfo) -> Result<f64>,
        F: Fn(&CommentWithVoteInfo) -> Result<bool>,
    {
        let k = k.unwrap_or_else(|| self.max_sample_size());

        let mut scored = Vec::new();
        for comment in self.filtered_comments() {
            if filter(comment)? {
                scored.push((score(comment)?, comment));
            }
        }
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, comment)| comment.clone())
            .collect())
    }

    /// Per-topic and per-subtopic engines of the same policy, sorted by descending comment count
    fn get_stats_by_topic(&self) -> Vec<TopicStats<Self>> {
        topics::stats_by_topic(self)
    }
}
