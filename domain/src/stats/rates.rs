//! Agree/disagree/pass rate estimators
//!
//! Every rate can be computed two ways:
//!
//! - as a probability estimate, the Laplace-smoothed `(count + 1) / (total + 2)`,
//!   which keeps sparse tallies away from 0 and 1;
//! - as a raw ratio `count / total`, defined as `0.0` when `total == 0`.
//!
//! Grouped vote info is pooled first (raw counts summed across groups) and
//! the formula is applied to the pooled counts, so larger groups weigh more.

use crate::comment::Comment;
use crate::vote::{VoteInfo, VoteTally};

/// Pseudo-votes added to the numerator of a smoothed rate.
pub const PRIOR_COUNT: f64 = 1.0;
/// Pseudo-votes added to the denominator of a smoothed rate.
pub const PRIOR_TOTAL: f64 = 2.0;

pub(crate) fn estimate(count: u64, total: u64, as_probability_estimate: bool) -> f64 {
    if as_probability_estimate {
        (count as f64 + PRIOR_COUNT) / (total as f64 + PRIOR_TOTAL)
    } else if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Probability of an agree vote
pub fn agree_rate(tally: &VoteTally, include_passes: bool, as_probability_estimate: bool) -> f64 {
    estimate(
        tally.agree_count,
        tally.total_count(include_passes),
        as_probability_estimate,
    )
}

/// Probability of a disagree vote
pub fn disagree_rate(tally: &VoteTally, include_passes: bool, as_probability_estimate: bool) -> f64 {
    estimate(
        tally.disagree_count,
        tally.total_count(include_passes),
        as_probability_estimate,
    )
}

/// Probability of a pass vote
///
/// Passes are always part of the denominator here.
pub fn pass_rate(tally: &VoteTally, as_probability_estimate: bool) -> f64 {
    estimate(tally.passes(), tally.total_count(true), as_probability_estimate)
}

/// Agree rate over pooled counts
pub fn total_agree_rate(info: &VoteInfo, include_passes: bool, as_probability_estimate: bool) -> f64 {
    agree_rate(&info.pooled(), include_passes, as_probability_estimate)
}

/// Disagree rate over pooled counts
pub fn total_disagree_rate(
    info: &VoteInfo,
    include_passes: bool,
    as_probability_estimate: bool,
) -> f64 {
    disagree_rate(&info.pooled(), include_passes, as_probability_estimate)
}

/// Pass rate over pooled counts
pub fn total_pass_rate(info: &VoteInfo, as_probability_estimate: bool) -> f64 {
    pass_rate(&info.pooled(), as_probability_estimate)
}

/// Total votes on a comment, `0` if it has no vote info
pub fn comment_vote_count(comment: &Comment, include_passes: bool) -> u64 {
    comment.vote_count(include_passes)
}
