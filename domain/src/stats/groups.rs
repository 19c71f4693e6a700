//! Cross-group comparison statistics
//!
//! Everything here needs per-group tallies. Asking for one of these on an
//! ungrouped comment, or on an empty group mapping, is a caller bug and fails
//! with [`StatsError::GroupsRequired`] rather than returning a default.

use super::rates::{agree_rate, disagree_rate, estimate};
use crate::comment::CommentWithVoteInfo;
use crate::core::error::{Result, StatsError};
use crate::vote::{GroupVoteTallies, VoteTally};

fn require_groups<'a>(
    comment: &'a CommentWithVoteInfo,
    statistic: &'static str,
) -> Result<&'a GroupVoteTallies> {
    comment
        .vote_info
        .as_groups()
        .filter(|groups| !groups.is_empty())
        .ok_or_else(|| StatsError::groups_required(statistic))
}

/// Product of every group's smoothed agree probability
pub fn group_informed_consensus(comment: &CommentWithVoteInfo) -> Result<f64> {
    let groups = require_groups(comment, "group informed consensus")?;
    Ok(groups
        .values()
        .map(|tally| agree_rate(tally, true, true))
        .product())
}

/// Product of every group's disagree probability
pub fn group_informed_disagree_consensus(
    comment: &CommentWithVoteInfo,
    as_probability_estimate: bool,
) -> Result<f64> {
    let groups = require_groups(comment, "group informed disagree consensus")?;
    Ok(groups
        .values()
        .map(|tally| disagree_rate(tally, true, as_probability_estimate))
        .product())
}

/// Lowest agree probability of any group
pub fn min_agree_prob(comment: &CommentWithVoteInfo, as_probability_estimate: bool) -> Result<f64> {
    let groups = require_groups(comment, "minimum agree probability")?;
    Ok(min_over(groups, |tally| {
        agree_rate(tally, true, as_probability_estimate)
    }))
}

/// Lowest disagree probability of any group
pub fn min_disagree_prob(
    comment: &CommentWithVoteInfo,
    as_probability_estimate: bool,
) -> Result<f64> {
    let groups = require_groups(comment, "minimum disagree probability")?;
    Ok(min_over(groups, |tally| {
        disagree_rate(tally, true, as_probability_estimate)
    }))
}

fn min_over(groups: &GroupVoteTallies, rate: impl Fn(&VoteTally) -> f64) -> f64 {
    groups.values().map(rate).reduce(f64::min).unwrap_or(0.0)
}

/// Agree probability of `group` minus the pooled agree probability of all other groups
///
/// `0.0` when `group` is not in the tally.
pub fn group_agree_prob_difference(
    comment: &CommentWithVoteInfo,
    group: &str,
    as_probability_estimate: bool,
) -> Result<f64> {
    let groups = require_groups(comment, "group agreement probability difference")?;
    Ok(agree_prob_difference(groups, group, as_probability_estimate))
}

fn agree_prob_difference(groups: &GroupVoteTallies, group: &str, as_probability_estimate: bool) -> f64 {
    let Some(tally) = groups.get(group) else {
        return 0.0;
    };
    let others = groups
        .iter()
        .filter(|(name, _)| name.as_str() != group)
        .fold(VoteTally::default(), |acc, (_, tally)| acc.merge(tally));

    agree_rate(tally, true, as_probability_estimate)
        - estimate(
            others.agree_count,
            others.total_count(true),
            as_probability_estimate,
        )
}

/// Largest absolute [`group_agree_prob_difference`] over the groups present
///
/// `0.0` when fewer than two groups voted, since there is nothing to compare.
pub fn max_group_agree_prob_difference(comment: &CommentWithVoteInfo) -> Result<f64> {
    let groups = require_groups(
        comment,
        "maximum group agreement probability difference",
    )?;
    if groups.len() < 2 {
        return Ok(0.0);
    }
    Ok(groups
        .keys()
        .map(|name| agree_prob_difference(groups, name, true).abs())
        .fold(0.0, f64::max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::VoteInfo;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn grouped(groups: &[(&str, VoteTally)]) -> CommentWithVoteInfo {
        CommentWithVoteInfo::new(
            "c",
            "text",
            VoteInfo::groups(groups.iter().map(|(n, t)| (*n, *t))),
        )
    }

    fn split() -> CommentWithVoteInfo {
        grouped(&[("A", VoteTally::new(9, 1)), ("B", VoteTally::new(1, 9))])
    }

    fn ungrouped() -> CommentWithVoteInfo {
        CommentWithVoteInfo::new("u", "text", VoteTally::new(9, 1))
    }

    #[test]
    fn test_group_informed_consensus_product() {
        let consensus = group_informed_consensus(&split()).unwrap();
        assert_approx(consensus, (10.0 / 12.0) * (2.0 / 12.0));
    }

    #[test]
    fn test_group_informed_consensus_counts_passes() {
        let comment = grouped(&[
            ("A", VoteTally::new(9, 1).with_passes(2)),
            ("B", VoteTally::new(1, 9)),
        ]);
        assert_approx(
            group_informed_consensus(&comment).unwrap(),
            (10.0 / 14.0) * (2.0 / 12.0),
        );
    }

    #[test]
    fn test_disagree_consensus() {
        let comment = grouped(&[("A", VoteTally::new(1, 9)), ("B", VoteTally::new(0, 8))]);
        assert_approx(
            group_informed_disagree_consensus(&comment, true).unwrap(),
            (10.0 / 12.0) * (9.0 / 10.0),
        );
        assert_approx(
            group_informed_disagree_consensus(&comment, false).unwrap(),
            0.9,
        );
    }

    #[test]
    fn test_min_probs() {
        assert_approx(min_agree_prob(&split(), true).unwrap(), 2.0 / 12.0);
        assert_approx(min_disagree_prob(&split(), true).unwrap(), 2.0 / 12.0);
        assert_approx(min_agree_prob(&split(), false).unwrap(), 0.1);
    }

    #[test]
    fn test_empty_group_mapping_is_rejected() {
        let comment = CommentWithVoteInfo::new("e", "text", GroupVoteTallies::new());
        assert!(matches!(
            group_informed_consensus(&comment),
            Err(StatsError::GroupsRequired { .. })
        ));
        assert!(group_informed_disagree_consensus(&comment, true).is_err());
        assert!(min_agree_prob(&comment, true).is_err());
        assert!(min_disagree_prob(&comment, false).is_err());
        assert!(group_agree_prob_difference(&comment, "A", true).is_err());
        assert!(max_group_agree_prob_difference(&comment).is_err());
    }

    #[test]
    fn test_group_difference_against_pooled_others() {
        let comment = grouped(&[
            ("A", VoteTally::new(8, 0)),
            ("B", VoteTally::new(1, 3)),
            ("C", VoteTally::new(1, 3)),
        ]);
        // Others pooled: 2 agree of 8 -> (2+1)/(8+2)
        assert_approx(
            group_agree_prob_difference(&comment, "A", true).unwrap(),
            9.0 / 10.0 - 3.0 / 10.0,
        );
    }

    #[test]
    fn test_group_difference_missing_group_is_zero() {
        assert_eq!(
            group_agree_prob_difference(&split(), "Z", true).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_max_difference_symmetric() {
        let forward = split();
        let reversed = grouped(&[("A", VoteTally::new(1, 9)), ("B", VoteTally::new(9, 1))]);
        let expected = 10.0 / 12.0 - 2.0 / 12.0;
        assert_approx(max_group_agree_prob_difference(&forward).unwrap(), expected);
        assert_approx(max_group_agree_prob_difference(&reversed).unwrap(), expected);
        assert_approx(
            group_agree_prob_difference(&forward, "A", true).unwrap(),
            -group_agree_prob_difference(&forward, "B", true).unwrap(),
        );
    }

    #[test]
    fn test_max_difference_single_group_is_zero() {
        let comment = grouped(&[("A", VoteTally::new(9, 1))]);
        assert_eq!(max_group_agree_prob_difference(&comment).unwrap(), 0.0);
    }

    #[test]
    fn test_ungrouped_comment_is_rejected() {
        let comment = ungrouped();
        assert!(group_informed_consensus(&comment).is_err());
        assert!(group_informed_disagree_consensus(&comment, true).is_err());
        assert!(min_agree_prob(&comment, true).is_err());
        assert!(min_disagree_prob(&comment, true).is_err());
        assert!(group_agree_prob_difference(&comment, "A", true).is_err());
        assert!(matches!(
            max_group_agree_prob_difference(&comment),
            Err(StatsError::GroupsRequired { .. })
        ));
    }
}
