//! Analyze Comments use case
//!
//! Loads comments from a [`CommentSource`], scores them with the selected
//! policy and collects every category of selection into an
//! [`AnalysisReport`]:
//!
//! | Section              | Group-informed | Majority |
//! |----------------------|----------------|----------|
//! | Overall categories   | yes            | yes      |
//! | Per-group breakdown  | yes            | no       |
//! | Per-topic categories | optional       | optional |

mod types;

pub use types::{
    AnalysisReport, AnalyzeError, AnalyzeInput, Category, CategoryReport, GroupReport,
    ScoredComment, TopicReport,
};

use crate::ports::comment_source::CommentSource;
use sensemaker_domain::stats::group_agree_prob_difference;
use sensemaker_domain::{
    CommentWithVoteInfo, GroupedSummaryStats, MajoritySummaryStats, StatsError,
    SummarizationType, SummaryStats, TopicStats, VoteInfo,
};
use tracing::{debug, info, warn};

/// Use case for selecting representative comments from a conversation
pub struct AnalyzeCommentsUseCase<S: CommentSource> {
    source: S,
}

impl<S: CommentSource> AnalyzeCommentsUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Execute the use case
    pub fn execute(&self, input: AnalyzeInput) -> Result<AnalysisReport, AnalyzeError> {
        let comments = self.source.load()?;
        if comments.is_empty() {
            return Err(AnalyzeError::NoComments);
        }
        info!(
            "Loaded {} comments, analyzing with {} policy",
            comments.len(),
            input.summarization
        );

        match input.summarization {
            SummarizationType::GroupInformedConsensus => {
                let stats = GroupedSummaryStats::with_config(comments, input.grouped.clone());
                let mut report = analyze(&stats, &input)?;
                report.groups = group_reports(&stats, input.sample_size)?;
                Ok(report)
            }
            SummarizationType::AggregateVote => {
                let stats = MajoritySummaryStats::with_config(comments, input.majority.clone());
                analyze(&stats, &input)
            }
        }
    }
}

fn analyze<E: SummaryStats>(
    stats: &E,
    input: &AnalyzeInput,
) -> Result<AnalysisReport, AnalyzeError> {
    let filtered_count = stats.filtered_comments().len();
    info!(
        "{} of {} comments have at least {} votes",
        filtered_count,
        stats.comment_count(),
        stats.min_vote_count()
    );
    if filtered_count == 0 {
        warn_nothing_scored(stats, input.summarization);
    }
    debug!(
        "Calibrated uncertainty threshold: {:.3}",
        stats.min_uncertainty_prob()
    );

    let categories = category_reports(stats, input.sample_size)?;
    let topics = if input.include_topics {
        topic_reports(&stats.get_stats_by_topic(), input.sample_size)?
    } else {
        Vec::new()
    };

    Ok(AnalysisReport {
        summarization: input.summarization,
        comment_count: stats.comment_count(),
        vote_count: stats.vote_count(),
        filtered_count,
        min_uncertainty_prob: stats.min_uncertainty_prob(),
        categories,
        groups: Vec::new(),
        topics,
    })
}

fn warn_nothing_scored<E: SummaryStats>(stats: &E, summarization: SummarizationType) {
    let has_ungrouped_votes = stats
        .comments()
        .iter()
        .any(|c| matches!(c.vote_info, Some(VoteInfo::Tally(_))));

    if summarization.uses_groups() && has_ungrouped_votes {
        warn!("Votes are not split by opinion group; use the majority policy to score them");
    } else {
        warn!("No comment has at least {} votes", stats.min_vote_count());
    }
}

fn category_reports<E: SummaryStats>(
    stats: &E,
    k: Option<usize>,
) -> Result<Vec<CategoryReport>, StatsError> {
    Category::ALL
        .iter()
        .map(|&category| category_report(stats, category, k))
        .collect()
}

fn category_report<E: SummaryStats>(
    stats: &E,
    category: Category,
    k: Option<usize>,
) -> Result<CategoryReport, StatsError> {
    let selected = match category {
        Category::CommonGround => stats.get_common_ground_comments(k)?,
        Category::CommonGroundAgree => stats.get_common_ground_agree_comments(k)?,
        Category::CommonGroundDisagree => stats.get_common_ground_disagree_comments(k)?,
        Category::DifferenceOfOpinion => stats.get_difference_of_opinion_comments(k)?,
        Category::Uncertain => stats.get_uncertain_comments(k)?,
    };

    let comments = selected
        .iter()
        .map(|comment| Ok(scored(comment, category_score(stats, category, comment)?)))
        .collect::<Result<Vec<_>, StatsError>>()?;

    let empty_message = if comments.is_empty() {
        match category {
            Category::CommonGround | Category::CommonGroundAgree | Category::CommonGroundDisagree => {
                Some(stats.get_common_ground_no_comments_message())
            }
            Category::DifferenceOfOpinion => {
                Some(stats.get_differences_of_opinion_no_comments_message())
            }
            Category::Uncertain => None,
        }
    } else {
        None
    };

    Ok(CategoryReport {
        category,
        comments,
        empty_message,
    })
}

fn category_score<E: SummaryStats>(
    stats: &E,
    category: Category,
    comment: &CommentWithVoteInfo,
) -> Result<f64, StatsError> {
    match category {
        Category::CommonGround => stats.get_common_ground_score(comment),
        Category::CommonGroundAgree => stats.get_common_ground_agree_score(comment),
        Category::CommonGroundDisagree => stats.get_common_ground_disagree_score(comment),
        Category::DifferenceOfOpinion => stats.get_difference_of_opinion_score(comment),
        Category::Uncertain => stats.get_uncertain_score(comment),
    }
}

fn scored(comment: &CommentWithVoteInfo, score: f64) -> ScoredComment {
    ScoredComment {
        id: comment.id.clone(),
        text: comment.text.clone(),
        score,
        vote_count: comment.vote_count(true),
    }
}

fn topic_reports<E: SummaryStats>(
    topics: &[TopicStats<E>],
    k: Option<usize>,
) -> Result<Vec<TopicReport>, StatsError> {
    topics
        .iter()
        .map(|topic| {
            debug!(
                "Topic '{}': {} comments, {} subtopics",
                topic.name,
                topic.comment_count,
                topic.subtopic_stats.len()
            );
            Ok(TopicReport {
                name: topic.name.clone(),
                comment_count: topic.comment_count,
                vote_count: topic.summary_stats.vote_count(),
                categories: category_reports(&topic.summary_stats, k)?,
                subtopics: topic_reports(&topic.subtopic_stats, k)?,
            })
        })
        .collect()
}

fn group_reports(
    stats: &GroupedSummaryStats,
    k: Option<usize>,
) -> Result<Vec<GroupReport>, StatsError> {
    let as_probability_estimate = stats.config().as_probability_estimate;

    stats
        .get_stats_by_group()
        .into_iter()
        .map(|group| {
            let representative = stats
                .get_group_representative_comments(&group.name, k)?
                .iter()
                .map(|comment| {
                    let difference =
                        group_agree_prob_difference(comment, &group.name, as_probability_estimate)?;
                    Ok(scored(comment, difference))
                })
                .collect::<Result<Vec<_>, StatsError>>()?;

            debug!(
                "Group '{}': {} votes, {} representative comments",
                group.name,
                group.vote_count,
                representative.len()
            );
            Ok(GroupReport {
                name: group.name,
                vote_count: group.vote_count,
                representative,
            })
        })
        .collect()
}
