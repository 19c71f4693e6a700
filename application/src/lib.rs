//! Application layer for sensemaker
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::comment_source::{CommentSource, CommentSourceError};
pub use use_cases::analyze_comments::{
    AnalysisReport, AnalyzeCommentsUseCase, AnalyzeError, AnalyzeInput, Category, CategoryReport,
    GroupReport, ScoredComment, TopicReport,
};
