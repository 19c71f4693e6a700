//! Comments and their topic labels

pub mod entities;
pub mod topic;

pub use entities::{Comment, CommentWithVoteInfo};
pub use topic::{FlatTopic, NestedTopic, Topic};
