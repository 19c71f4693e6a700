//! Configuration value objects for the domain layer
//!
//! Every threshold of both policies is an overridable construction
//! parameter; these types carry them and check them.

mod grouped;
mod majority;
mod output_format;
mod summarization_type;
mod validation;

pub use grouped::GroupedConfig;
pub use majority::MajorityConfig;
pub use output_format::OutputFormat;
pub use summarization_type::SummarizationType;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
