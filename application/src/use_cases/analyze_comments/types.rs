//! Type definitions for the AnalyzeComments use case.

use crate::ports::comment_source::CommentSourceError;
use sensemaker_domain::{GroupedConfig, MajorityConfig, StatsError, SummarizationType};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("No comments to analyze")]
    NoComments,

    #[error(transparent)]
    Source(#[from] CommentSourceError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Input for the AnalyzeComments use case
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    /// Which policy scores the comments
    pub summarization: SummarizationType,
    /// Thresholds used when `summarization` is group-informed
    pub grouped: GroupedConfig,
    /// Thresholds used when `summarization` is majority
    pub majority: MajorityConfig,
    /// Comments per category; the policy's `max_sample_size` when `None`
    pub sample_size: Option<usize>,
    /// Repeat the analysis for every topic and subtopic
    pub include_topics: bool,
}

impl Default for AnalyzeInput {
    fn default() -> Self {
        Self {
            summarization: SummarizationType::default(),
            grouped: GroupedConfig::default(),
            majority: MajorityConfig::default(),
            sample_size: None,
            include_topics: true,
        }
    }
}

impl AnalyzeInput {
    pub fn new(summarization: SummarizationType) -> Self {
        Self {
            summarization,
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_grouped(mut self, config: GroupedConfig) -> Self {
        self.grouped = config;
        self
    }

    pub fn with_majority(mut self, config: MajorityConfig) -> Self {
        self.majority = config;
        self
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    pub fn with_topics(mut self, include: bool) -> Self {
        self.include_topics = include;
        self
    }
}

/// Kind of selection a set of comments was chosen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CommonGround,
    CommonGroundAgree,
    CommonGroundDisagree,
    DifferenceOfOpinion,
    Uncertain,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CommonGround,
        Category::CommonGroundAgree,
        Category::CommonGroundDisagree,
        Category::DifferenceOfOpinion,
        Category::Uncertain,
    ];

    /// Heading used in reports
    pub fn title(&self) -> &'static str {
        match self {
            Category::CommonGround => "Common ground",
            Category::CommonGroundAgree => "Common ground (agreement)",
            Category::CommonGroundDisagree => "Common ground (disagreement)",
            Category::DifferenceOfOpinion => "Differences of opinion",
            Category::Uncertain => "Uncertain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A selected comment with the score it was ranked by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredComment {
    pub id: String,
    pub text: String,
    pub score: f64,
    /// Votes including passes
    pub vote_count: u64,
}

/// The comments selected for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub comments: Vec<ScoredComment>,
    /// Why nothing was selected, when the policy explains it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// One opinion group (group-informed policy only)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub name: String,
    pub vote_count: u64,
    /// Comments this group agrees with distinctly more than the others
    pub representative: Vec<ScoredComment>,
}

/// Per-topic (or per-subtopic) analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicReport {
    pub name: String,
    pub comment_count: usize,
    pub vote_count: u64,
    pub categories: Vec<CategoryReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtopics: Vec<TopicReport>,
}

/// Output of the AnalyzeComments use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summarization: SummarizationType,
    pub comment_count: usize,
    pub vote_count: u64,
    /// Comments with enough votes to be scored
    pub filtered_count: usize,
    /// Calibrated uncertainty threshold
    pub min_uncertainty_prob: f64,
    pub categories: Vec<CategoryReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<TopicReport>,
}

impl AnalysisReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }
}
