//! Topic labels attached to comments

use serde::{Deserialize, Serialize};

/// A topic name with no subtopics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTopic {
    pub name: String,
}

/// A topic name with flat subtopics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedTopic {
    pub name: String,
    pub subtopics: Vec<FlatTopic>,
}

/// A topic label, either flat or carrying subtopics
///
/// Comments in one set may mix both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Topic {
    Nested(NestedTopic),
    Flat(FlatTopic),
}

impl Topic {
    /// Create a flat topic
    pub fn flat(name: impl Into<String>) -> Self {
        Topic::Flat(FlatTopic { name: name.into() })
    }

    /// Create a topic with subtopics
    pub fn nested<I, S>(name: impl Into<String>, subtopics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Topic::Nested(NestedTopic {
            name: name.into(),
            subtopics: subtopics
                .into_iter()
                .map(|s| FlatTopic { name: s.into() })
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Topic::Nested(topic) => &topic.name,
            Topic::Flat(topic) => &topic.name,
        }
    }

    /// Subtopics, empty for a flat topic
    pub fn subtopics(&self) -> &[FlatTopic] {
        match self {
            Topic::Nested(topic) => &topic.subtopics,
            Topic::Flat(_) => &[],
        }
    }

    /// Whether this topic lists at least one subtopic
    pub fn has_subtopics(&self) -> bool {
        !self.subtopics().is_empty()
    }
}
