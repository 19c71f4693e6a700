//! Vote tally model
//!
//! [`VoteTally`] holds one set of agree/disagree/pass counts; [`VoteInfo`]
//! is what a comment carries, either a single tally or one per opinion group.

pub mod info;
pub mod tally;

pub use info::{GroupVoteTallies, VoteInfo};
pub use tally::VoteTally;
