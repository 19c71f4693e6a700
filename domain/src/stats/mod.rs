//! Consensus statistics
//!
//! Rate estimators, cross-group statistics and the two scoring policies
//! built on the shared [`SummaryStats`] contract.

pub mod engine;
pub mod grouped;
pub mod groups;
pub mod majority;
pub mod rates;
pub mod topics;

pub use engine::{CommentPool, PoolOptions, SummaryStats, UNCERTAINTY_QUANTILE, quantile};
pub use grouped::{GroupStats, GroupedSummaryStats};
pub use groups::{
    group_agree_prob_difference, group_informed_consensus, group_informed_disagree_consensus,
    max_group_agree_prob_difference, min_agree_prob, min_disagree_prob,
};
pub use majority::MajoritySummaryStats;
pub use rates::{
    agree_rate, comment_vote_count, disagree_rate, pass_rate, total_agree_rate,
    total_disagree_rate, total_pass_rate,
};
pub use topics::{
    GENERAL_SUBTOPIC, OTHER_TOPIC, SubtopicBucket, TopicBucket, TopicStats, UNCATEGORIZED_TOPIC,
    group_comments_by_subtopic, sort_topic_stats,
};
