//! Majority-vote policy
//!
//! Ignores opinion groups and works on pooled totals. Pass votes gate every
//! common ground and difference selection so a comment cannot be both
//! "agreed on" and "uncertain".

use super::engine::{CommentPool, PoolOptions, SummaryStats};
use super::rates::{total_agree_rate, total_disagree_rate, total_pass_rate};
use crate::comment::{Comment, CommentWithVoteInfo};
use crate::config::MajorityConfig;
use crate::core::error::Result;
use crate::core::format::decimal_to_percent;

/// Summary statistics based on simple majority agreement
#[derive(Debug, Clone)]
pub struct MajoritySummaryStats {
    pool: CommentPool,
    config: MajorityConfig,
}

impl MajoritySummaryStats {
    /// Build with default thresholds
    pub fn new(comments: Vec<Comment>) -> Self {
        Self::with_config(comments, MajorityConfig::default())
    }

    pub fn with_config(comments: Vec<Comment>, config: MajorityConfig) -> Self {
        let options = PoolOptions {
            min_vote_count: config.min_vote_count,
            require_groups: false,
            as_probability_estimate: config.as_probability_estimate,
            min_uncertainty_prob: config.min_uncertainty_prob,
        };
        Self {
            pool: CommentPool::new(comments, &options),
            config,
        }
    }

    pub fn config(&self) -> &MajorityConfig {
        &self.config
    }

    fn agree_rate(&self, comment: &CommentWithVoteInfo) -> f64 {
        total_agree_rate(
            &comment.vote_info,
            self.config.include_passes,
            self.config.as_probability_estimate,
        )
    }

    fn disagree_rate(&self, comment: &CommentWithVoteInfo) -> f64 {
        total_disagree_rate(
            &comment.vote_info,
            self.config.include_passes,
            self.config.as_probability_estimate,
        )
    }

    fn pass_rate(&self, comment: &CommentWithVoteInfo) -> f64 {
        total_pass_rate(&comment.vote_info, self.config.as_probability_estimate)
    }

    /// Pass rate stays clear of the uncertainty threshold by `uncertainty_buffer`
    fn is_decided(&self, comment: &CommentWithVoteInfo) -> bool {
        self.pass_rate(comment) <= self.min_uncertainty_prob() - self.config.uncertainty_buffer
    }

    fn in_difference_range(&self, rate: f64) -> bool {
        (self.config.min_difference_prob..=self.config.max_difference_prob).contains(&rate)
    }

    pub fn meets_common_ground_agree_threshold(&self, comment: &CommentWithVoteInfo) -> bool {
        self.agree_rate(comment) >= self.config.min_common_ground_prob && self.is_decided(comment)
    }

    pub fn meets_common_ground_disagree_threshold(&self, comment: &CommentWithVoteInfo) -> bool {
        self.disagree_rate(comment) >= self.config.min_common_ground_prob
            && self.is_decided(comment)
    }

    /// Agree and disagree rates are both inside the difference range and the comment is decided
    pub fn meets_difference_of_opinion_threshold(&self, comment: &CommentWithVoteInfo) -> bool {
        self.in_difference_range(self.agree_rate(comment))
            && self.in_difference_range(self.disagree_rate(comment))
            && self.is_decided(comment)
    }
}

impl SummaryStats for MajoritySummaryStats {
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
        Ok(self.agree_rate(comment).max(self.disagree_rate(comment)))
    }

    fn get_common_ground_comments(&self, k: Option<usize>) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_common_ground_score(c),
            k,
            |c| {
                Ok(self.meets_common_ground_agree_threshold(c)
                    || self.meets_common_ground_disagree_threshold(c))
            },
        )
    }

    fn get_common_ground_agree_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        Ok(self.agree_rate(comment))
    }

    fn get_common_ground_agree_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_common_ground_agree_score(c),
            k,
            |c| Ok(self.meets_common_ground_agree_threshold(c)),
        )
    }

    fn get_common_ground_disagree_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        Ok(self.disagree_rate(comment))
    }

    fn get_common_ground_disagree_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_common_ground_disagree_score(c),
            k,
            |c| Ok(self.meets_common_ground_disagree_threshold(c)),
        )
    }

    fn get_common_ground_no_comments_message(&self) -> String {
        format!(
            "No statements met the thresholds necessary to be considered as a point of common \
             ground (at least {} votes, and at least {} agreement).",
            self.config.min_vote_count,
            decimal_to_percent(self.config.min_common_ground_prob)
        )
    }

    /// `1 - |agree - disagree| - pass`: highest for an even, decided split
    fn get_difference_of_opinion_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        Ok(1.0
            - (self.agree_rate(comment) - self.disagree_rate(comment)).abs()
            - self.pass_rate(comment))
    }

    fn get_difference_of_opinion_comments(
        &self,
        k: Option<usize>,
    ) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_difference_of_opinion_score(c),
            k,
            |c| Ok(self.meets_difference_of_opinion_threshold(c)),
        )
    }

    fn get_differences_of_opinion_no_comments_message(&self) -> String {
        format!(
            "No statements met the thresholds necessary to be considered as a significant \
             difference of opinion (at least {} votes, and both an agreement rate and disagree \
             rate between {} and {}).",
            self.config.min_vote_count,
            decimal_to_percent(self.config.min_difference_prob),
            decimal_to_percent(self.config.max_difference_prob)
        )
    }

    fn get_uncertain_score(&self, comment: &CommentWithVoteInfo) -> Result<f64> {
        Ok(self.pass_rate(comment))
    }

    fn get_uncertain_comments(&self, k: Option<usize>) -> Result<Vec<CommentWithVoteInfo>> {
        self.top_k(
            |c| self.get_uncertain_score(c),
            k,
            |c| Ok(self.pass_rate(c) >= self.min_uncertainty_prob()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::{VoteInfo, VoteTally};

    const EPS: f64 = 1e-9;

    fn ids(comments: &[CommentWithVoteInfo]) -> Vec<&str> {
        comments.iter().map(|c| c.id.as_str()).collect()
    }

    fn fixture() -> Vec<Comment> {
        vec![
            Comment::new("agree", "a").with_votes(VoteTally::new(18, 2)),
            Comment::new("disagree", "d").with_votes(VoteTally::new(2, 18)),
            Comment::new("split", "s").with_votes(VoteTally::new(10, 10)),
            Comment::new("unsure", "u").with_votes(VoteTally::new(5, 5).with_passes(10)),
            Comment::new("sparse", "x").with_votes(VoteTally::new(2, 1)),
            Comment::new("grouped", "g").with_votes(VoteInfo::groups([
                ("A", VoteTally::new(9, 1)),
                ("B", VoteTally::new(9, 1)),
            ])),
        ]
    }

    fn single(tally: VoteTally, config: MajorityConfig) -> MajoritySummaryStats {
        MajoritySummaryStats::with_config(vec![Comment::new("c", "c").with_votes(tally)], config)
    }

    #[test]
    fn test_accepts_grouped_votes_as_totals() {
        let stats = MajoritySummaryStats::new(fixture());
        assert_eq!(
            ids(stats.filtered_comments()),
            vec!["agree", "disagree", "split", "unsure", "grouped"]
        );
        let grouped = &stats.filtered_comments()[4];
        assert!((stats.get_common_ground_agree_score(grouped).unwrap() - 0.9).abs() < EPS);
    }

    #[test]
    fn test_common_ground_agree_keeps_tie_order() {
        let stats = MajoritySummaryStats::new(fixture());
        let selected = stats.get_common_ground_agree_comments(None).unwrap();
        assert_eq!(ids(&selected), vec!["agree", "grouped"]);
    }

    #[test]
    fn test_common_ground_disagree() {
        let stats = MajoritySummaryStats::new(fixture());
        let selected = stats.get_common_ground_disagree_comments(None).unwrap();
        assert_eq!(ids(&selected), vec!["disagree"]);
    }

    #[test]
    fn test_common_ground_combined() {
        let stats = MajoritySummaryStats::new(fixture());
        let selected = stats.get_common_ground_comments(None).unwrap();
        assert_eq!(ids(&selected), vec!["agree", "disagree", "grouped"]);
    }

    #[test]
    fn test_difference_of_opinion() {
        let stats = MajoritySummaryStats::new(fixture());
        let selected = stats.get_difference_of_opinion_comments(None).unwrap();
        // "unsure" is evenly split too, but its pass rate is far too high.
        assert_eq!(ids(&selected), vec!["split"]);
        let score = stats.get_difference_of_opinion_score(&selected[0]).unwrap();
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn test_difference_of_opinion_score_penalizes_passes() {
        let stats = single(VoteTally::new(45, 50).with_passes(5), MajorityConfig::default());
        let comment = &stats.filtered_comments()[0];
        let expected = 1.0 - (50.0 / 95.0 - 45.0 / 95.0) - 0.05;
        let score = stats.get_difference_of_opinion_score(comment).unwrap();
        assert!((score - expected).abs() < EPS);
        assert!(stats.meets_difference_of_opinion_threshold(comment));
    }

    #[test]
    fn test_uncertain() {
        let stats = MajoritySummaryStats::new(fixture());
        assert!((stats.min_uncertainty_prob() - 0.2).abs() < EPS);
        let selected = stats.get_uncertain_comments(None).unwrap();
        assert_eq!(ids(&selected), vec!["unsure"]);
    }

    #[test]
    fn test_uncertain_threshold_is_inclusive() {
        let config = MajorityConfig::default().with_min_uncertainty_prob(0.25);
        let stats = single(VoteTally::new(6, 0).with_passes(2), config);
        assert_eq!(stats.get_uncertain_comments(None).unwrap().len(), 1);
    }

    #[test]
    fn test_uncertainty_buffer_boundary() {
        let config = MajorityConfig::default().with_min_uncertainty_prob(0.1);

        // Pass rate 0.05 sits exactly on 0.1 - 0.05.
        let stats = single(VoteTally::new(80, 15).with_passes(5), config.clone());
        let comment = &stats.filtered_comments()[0];
        assert!(stats.meets_common_ground_agree_threshold(comment));

        // Pass rate 0.06 is inside the buffer.
        let stats = single(VoteTally::new(80, 14).with_passes(6), config);
        let comment = &stats.filtered_comments()[0];
        assert!(!stats.meets_common_ground_agree_threshold(comment));
        assert!(stats.get_common_ground_agree_comments(None).unwrap().is_empty());
    }

    #[test]
    fn test_include_passes_changes_rates() {
        let tally = VoteTally::new(80, 15).with_passes(5);
        let without = single(tally, MajorityConfig::default());
        let with = single(tally, MajorityConfig::default().with_include_passes(true));

        let score = |stats: &MajoritySummaryStats| {
            stats
                .get_common_ground_agree_score(&stats.filtered_comments()[0])
                .unwrap()
        };
        assert!((score(&without) - 80.0 / 95.0).abs() < EPS);
        assert!((score(&with) - 0.8).abs() < EPS);
    }

    #[test]
    fn test_probability_estimate_toggle() {
        let config = MajorityConfig::default().with_probability_estimate(true);
        let stats = single(VoteTally::new(4, 1), config);
        let comment = &stats.filtered_comments()[0];
        assert!((stats.get_common_ground_agree_score(comment).unwrap() - 5.0 / 7.0).abs() < EPS);
    }

    #[test]
    fn test_create_keeps_config() {
        let config = MajorityConfig::default().with_max_sample_size(1);
        let stats = MajoritySummaryStats::with_config(fixture(), config);
        let copy = stats.create(fixture());
        assert_eq!(copy.max_sample_size(), 1);
        assert_eq!(copy.get_common_ground_comments(None).unwrap().len(), 1);
    }

    #[test]
    fn test_vote_and_comment_counts() {
        let stats = MajoritySummaryStats::new(fixture());
        assert_eq!(stats.comment_count(), 6);
        assert_eq!(stats.vote_count(), 20 + 20 + 20 + 20 + 3 + 20);
    }

    #[test]
    fn test_huge_tallies_saturate_vote_count() {
        let huge: Comment = serde_json::from_str(
            r#"{"id": "huge", "text": "h",
                "voteInfo": {"agreeCount": 18446744073709551615, "disagreeCount": 1}}"#,
        )
        .unwrap();
        assert_eq!(huge.vote_count(true), u64::MAX);

        let stats = MajoritySummaryStats::new(vec![
            huge,
            Comment::new("small", "s").with_votes(VoteTally::new(4, 4)),
        ]);
        assert_eq!(stats.vote_count(), u64::MAX);
        assert_eq!(ids(stats.filtered_comments()), vec!["huge", "small"]);
        assert_eq!(ids(&stats.get_common_ground_agree_comments(None).unwrap()), vec!["huge"]);
    }

    #[test]
    fn test_messages() {
        let stats = MajoritySummaryStats::new(Vec::new());
        assert_eq!(
            stats.get_common_ground_no_comments_message(),
            "No statements met the thresholds necessary to be considered as a point of common \
             ground (at least 5 votes, and at least 70% agreement)."
        );
        assert!(stats
            .get_differences_of_opinion_no_comments_message()
            .ends_with("between 40% and 60%)."));
    }
}
