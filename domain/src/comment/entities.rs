//! Comment entities

use super::topic::Topic;
use crate::vote::VoteInfo;
use serde::{Deserialize, Serialize};

/// A free-text comment from a deliberation, optionally with votes and topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_info: Option<VoteInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,
}

impl Comment {
    /// Create a comment without votes or topics
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            vote_info: None,
            topics: None,
        }
    }

    /// Attach vote info
    pub fn with_votes(mut self, vote_info: impl Into<VoteInfo>) -> Self {
        self.vote_info = Some(vote_info.into());
        self
    }

    /// Attach topic labels
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topics = Some(topics);
        self
    }

    /// Topic labels, empty when absent
    pub fn topics(&self) -> &[Topic] {
        self.topics.as_deref().unwrap_or(&[])
    }

    /// Total votes, `0` when the comment carries no vote info
    pub fn vote_count(&self, include_passes: bool) -> u64 {
        self.vote_info
            .as_ref()
            .map_or(0, |info| info.total_count(include_passes))
    }

    /// A copy of this comment typed as carrying votes, if it does
    pub fn with_vote_info(&self) -> Option<CommentWithVoteInfo> {
        self.vote_info.clone().map(|vote_info| CommentWithVoteInfo {
            id: self.id.clone(),
            text: self.text.clone(),
            vote_info,
            topics: self.topics.clone(),
        })
    }
}

/// A comment whose vote info is known to be present
///
/// This is the record the statistics engine filters, scores and selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithVoteInfo {
    pub id: String,
    pub text: String,
    pub vote_info: VoteInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,
}

impl CommentWithVoteInfo {
    pub fn new(id: impl Into<String>, text: impl Into<String>, vote_info: impl Into<VoteInfo>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            vote_info: vote_info.into(),
            topics: None,
        }
    }

    /// Total votes across all groups
    pub fn vote_count(&self, include_passes: bool) -> u64 {
        self.vote_info.total_count(include_passes)
    }
}

impl TryFrom<Comment> for CommentWithVoteInfo {
    type Error = Comment;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        match comment.vote_info {
            Some(vote_info) => Ok(CommentWithVoteInfo {
                id: comment.id,
                text: comment.text,
                vote_info,
                topics: comment.topics,
            }),
            None => Err(comment),
        }
    }
}

impl From<CommentWithVoteInfo> for Comment {
    fn from(comment: CommentWithVoteInfo) -> Self {
        Comment {
            id: comment.id,
            text: comment.text,
            vote_info: Some(comment.vote_info),
            topics: comment.topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::VoteTally;

    #[test]
    fn test_vote_count_without_votes_is_zero() {
        let comment = Comment::new("1", "More parks");
        assert_eq!(comment.vote_count(true), 0);
        assert!(comment.with_vote_info().is_none());
    }

    #[test]
    fn test_vote_count_grouped() {
        let comment = Comment::new("1", "More parks").with_votes(VoteInfo::groups([
            ("A", VoteTally::new(2, 1).with_passes(1)),
            ("B", VoteTally::new(3, 0)),
        ]));
        assert_eq!(comment.vote_count(true), 7);
        assert_eq!(comment.vote_count(false), 6);
    }

    #[test]
    fn test_try_from_comment() {
        let voted = Comment::new("1", "More parks").with_votes(VoteTally::new(5, 1));
        let typed = CommentWithVoteInfo::try_from(voted).unwrap();
        assert_eq!(typed.vote_count(false), 6);

        let unvoted = Comment::new("2", "Fewer cars");
        assert_eq!(
            CommentWithVoteInfo::try_from(unvoted.clone()),
            Err(unvoted)
        );
    }

    #[test]
    fn test_deserialize_null_fields_as_absent() {
        let comment: Comment = serde_json::from_str(
            r#"{"id": "7", "text": "Safer crossings", "voteInfo": null, "topics": null}"#,
        )
        .unwrap();
        assert!(comment.vote_info.is_none());
        assert!(comment.topics().is_empty());
    }

    #[test]
    fn test_deserialize_full_comment() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": "3",
                "text": "Extend library hours",
                "voteInfo": {"g0": {"agreeCount": 5, "disagreeCount": 0}},
                "topics": [{"name": "Services", "subtopics": [{"name": "Libraries"}]}]
            }"#,
        )
        .unwrap();
        assert!(comment.vote_info.as_ref().unwrap().is_grouped());
        assert_eq!(comment.topics()[0].subtopics()[0].name, "Libraries");
    }
}
