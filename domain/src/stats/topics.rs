//! Per-topic aggregation
//!
//! Comments are bucketed by topic and then by subtopic, and a fresh engine of
//! the caller's policy is built for each bucket. The result is a two-level
//! tree: topics, each with its subtopics.

use super::engine::SummaryStats;
use crate::comment::Comment;
use std::collections::{HashMap, HashSet};

/// Topic holding comments that have no topic labels
pub const UNCATEGORIZED_TOPIC: &str = "Uncategorized";
/// Subtopic holding a topic's comments that name no subtopic
pub const GENERAL_SUBTOPIC: &str = "General";
/// Catch-all topic/subtopic name, always sorted last
pub const OTHER_TOPIC: &str = "Other";

/// Statistics for one topic or subtopic
#[derive(Debug, Clone)]
pub struct TopicStats<S> {
    pub name: String,
    pub comment_count: usize,
    /// Engine scoped to exactly this topic's comments
    pub summary_stats: S,
    /// Empty for subtopics
    pub subtopic_stats: Vec<TopicStats<S>>,
}

/// Comments of one subtopic, de-duplicated by id in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct SubtopicBucket {
    pub name: String,
    pub comments: Vec<Comment>,
}

/// A topic and its subtopic buckets, in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct TopicBucket {
    pub name: String,
    pub subtopics: Vec<SubtopicBucket>,
}

impl TopicBucket {
    /// Union of all subtopic comments, de-duplicated by id
    pub fn all_comments(&self) -> Vec<Comment> {
        unique_by_id(self.subtopics.iter().flat_map(|s| s.comments.iter()))
    }
}

fn unique_by_id<'a>(comments: impl Iterator<Item = &'a Comment>) -> Vec<Comment> {
    let mut seen = HashSet::new();
    comments
        .filter(|c| seen.insert(c.id.as_str()))
        .cloned()
        .collect()
}

/// Buckets under construction, with index lookups so each insert is constant time
#[derive(Default)]
struct Bucketer<'a> {
    buckets: Vec<TopicBucket>,
    topics: HashMap<&'a str, usize>,
    subtopics: HashMap<(usize, &'a str), usize>,
    seen: HashSet<(usize, usize, &'a str)>,
}

impl<'a> Bucketer<'a> {
    fn add(&mut self, topic: &'a str, subtopic: &'a str, comment: &'a Comment) {
        let topic_index = *self.topics.entry(topic).or_insert_with(|| {
            self.buckets.push(TopicBucket {
                name: topic.to_string(),
                subtopics: Vec::new(),
            });
            self.buckets.len() - 1
        });
        let subtopics = &mut self.buckets[topic_index].subtopics;
        let subtopic_index = *self
            .subtopics
            .entry((topic_index, subtopic))
            .or_insert_with(|| {
                subtopics.push(SubtopicBucket {
                    name: subtopic.to_string(),
                    comments: Vec::new(),
                });
                subtopics.len() - 1
            });
        if self.seen.insert((topic_index, subtopic_index, comment.id.as_str())) {
            subtopics[subtopic_index].comments.push(comment.clone());
        }
    }
}

/// Bucket comments by topic, then by subtopic
///
/// A comment whose topic lists no subtopics lands in that topic's
/// [`GENERAL_SUBTOPIC`]; a comment with no topics lands in
/// [`UNCATEGORIZED_TOPIC`].
pub fn group_comments_by_subtopic(comments: &[Comment]) -> Vec<TopicBucket> {
    let mut bucketer = Bucketer::default();

    for comment in comments {
        if comment.topics().is_empty() {
            bucketer.add(UNCATEGORIZED_TOPIC, GENERAL_SUBTOPIC, comment);
            continue;
        }
        for topic in comment.topics() {
            if topic.has_subtopics() {
                for subtopic in topic.subtopics() {
                    bucketer.add(topic.name(), &subtopic.name, comment);
                }
            } else {
                bucketer.add(topic.name(), GENERAL_SUBTOPIC, comment);
            }
        }
    }

    bucketer.buckets
}

/// Sort topics, and each topic's subtopics, by comment count
///
/// [`OTHER_TOPIC`] goes last in either direction. Ties keep their order.
pub fn sort_topic_stats<S>(stats: &mut [TopicStats<S>], descending: bool) {
    let order = |a: &TopicStats<S>, b: &TopicStats<S>| {
        let by_other = (a.name == OTHER_TOPIC).cmp(&(b.name == OTHER_TOPIC));
        let by_count = if descending {
            b.comment_count.cmp(&a.comment_count)
        } else {
            a.comment_count.cmp(&b.comment_count)
        };
        by_other.then(by_count)
    };

    stats.sort_by(order);
    for topic in stats.iter_mut() {
        topic.subtopic_stats.sort_by(order);
    }
}

pub(crate) fn stats_by_topic<S: SummaryStats>(engine: &S) -> Vec<TopicStats<S>> {
    let mut stats: Vec<TopicStats<S>> = group_comments_by_subtopic(engine.comments())
        .into_iter()
        .map(|bucket| {
            let topic_comments = bucket.all_comments();
            let subtopic_stats = bucket
                .subtopics
                .into_iter()
                .map(|subtopic| TopicStats {
                    name: subtopic.name,
                    comment_count: subtopic.comments.len(),
                    summary_stats: engine.create(subtopic.comments),
                    subtopic_stats: Vec::new(),
                })
                .collect();

            TopicStats {
                name: bucket.name,
                comment_count: topic_comments.len(),
                summary_stats: engine.create(topic_comments),
                subtopic_stats,
            }
        })
        .collect();

    sort_topic_stats(&mut stats, true);
    stats
}
