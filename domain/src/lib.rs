//! Domain layer for sensemaker
//!
//! This crate contains the vote model and the consensus statistics that
//! select comments for summarization. It has no I/O and no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Votes
//!
//! - **VoteTally**: agree / disagree / (optional) pass counts
//! - **VoteInfo**: a single tally, or one tally per opinion group
//!
//! ## Policies
//!
//! Both implement [`SummaryStats`]:
//!
//! - **GroupedSummaryStats** (default): rewards agreement that holds across
//!   every opinion group and surfaces where groups diverge
//! - **MajoritySummaryStats**: pooled totals with pass-rate gating
//!
//! Every selection is a stable top-k over the comments with enough votes,
//! and [`SummaryStats::get_stats_by_topic`] repeats the analysis per topic
//! and subtopic.

pub mod comment;
pub mod config;
pub mod core;
pub mod stats;
pub mod vote;

// Re-export commonly used types
pub use comment::{Comment, CommentWithVoteInfo, FlatTopic, NestedTopic, Topic};
pub use config::{
    ConfigIssue, ConfigIssueCode, GroupedConfig, MajorityConfig, OutputFormat, Severity,
    SummarizationType,
};
pub use core::{
    error::StatsError,
    format::{decimal_to_percent, truncate},
};
pub use stats::{
    CommentPool, GroupStats, GroupedSummaryStats, MajoritySummaryStats, SummaryStats, TopicStats,
    group_comments_by_subtopic, sort_topic_stats,
};
pub use vote::{GroupVoteTallies, VoteInfo, VoteTally};
