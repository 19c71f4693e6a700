//! Console output formatter for analysis reports

use crate::output::formatter::ReportFormatter;
use colored::Colorize;
use sensemaker_application::{AnalysisReport, CategoryReport, ScoredComment, TopicReport};
use sensemaker_domain::{decimal_to_percent, truncate};

const TEXT_WIDTH: usize = 72;

/// Formats analysis reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &AnalysisReport) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Consensus Statistics"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Policy:".cyan().bold(),
            report.summarization
        ));
        output.push_str(&format!(
            "{} {} ({} with enough votes)\n",
            "Comments:".cyan().bold(),
            report.comment_count,
            report.filtered_count
        ));
        output.push_str(&format!("{} {}\n", "Votes:".cyan().bold(), report.vote_count));
        output.push_str(&format!(
            "{} {}\n",
            "Uncertainty threshold:".cyan().bold(),
            decimal_to_percent(report.min_uncertainty_prob)
        ));

        // Overall categories
        for category in &report.categories {
            output.push_str(&Self::section_header(category.category.title()));
            output.push_str(&Self::format_category(category));
        }

        // Opinion groups (group-informed only)
        if !report.groups.is_empty() {
            output.push_str(&Self::section_header("Opinion groups"));
            for group in &report.groups {
                output.push_str(&format!(
                    "\n{}\n",
                    format!("── {} ({} votes) ──", group.name, group.vote_count)
                        .yellow()
                        .bold()
                ));
                if group.representative.is_empty() {
                    output.push_str(&format!("  {}\n", "No representative statements".dimmed()));
                }
                for comment in &group.representative {
                    output.push_str(&Self::format_comment(comment, "  "));
                }
            }
        }

        // Topics
        if !report.topics.is_empty() {
            output.push_str(&Self::section_header("Topics"));
            for topic in &report.topics {
                output.push_str(&Self::format_topic(topic, 0));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &AnalysisReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_category(category: &CategoryReport) -> String {
        if category.comments.is_empty() {
            let message = category
                .empty_message
                .as_deref()
                .unwrap_or("No statements selected.");
            return format!("  {}\n", message.dimmed());
        }
        category
            .comments
            .iter()
            .map(|comment| Self::format_comment(comment, "  "))
            .collect()
    }

    fn format_comment(comment: &ScoredComment, prefix: &str) -> String {
        format!(
            "{}{} {} {}\n{}    {}\n",
            prefix,
            format!("[{}]", comment.id).green(),
            format!("score {:.3}", comment.score).bold(),
            format!("({} votes)", comment.vote_count).dimmed(),
            prefix,
            truncate(&comment.text, TEXT_WIDTH)
        )
    }

    fn format_topic(topic: &TopicReport, depth: usize) -> String {
        let prefix = "  ".repeat(depth);
        let mut output = format!(
            "\n{}{} {}\n",
            prefix,
            topic.name.yellow().bold(),
            format!(
                "({} comments, {} votes)",
                topic.comment_count, topic.vote_count
            )
            .dimmed()
        );

        for category in topic.categories.iter().filter(|c| !c.comments.is_empty()) {
            let ids: Vec<&str> = category.comments.iter().map(|c| c.id.as_str()).collect();
            output.push_str(&format!(
                "{}  {} {}\n",
                prefix,
                format!("{}:", category.category.title()).cyan(),
                ids.join(", ")
            ));
        }

        for subtopic in &topic.subtopics {
            output.push_str(&Self::format_topic(subtopic, depth + 1));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &AnalysisReport) -> String {
        Self::format_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensemaker_application::{Category, GroupReport};
    use sensemaker_domain::SummarizationType;

    fn scored(id: &str, text: &str) -> ScoredComment {
        ScoredComment {
            id: id.to_string(),
            text: text.to_string(),
            score: 0.9,
            vote_count: 20,
        }
    }

    fn report() -> AnalysisReport {
        AnalysisReport {
            summarization: SummarizationType::GroupInformedConsensus,
            comment_count: 3,
            vote_count: 60,
            filtered_count: 2,
            min_uncertainty_prob: 0.25,
            categories: vec![
                CategoryReport {
                    category: Category::CommonGround,
                    comments: vec![scored("c1", "More buses at night")],
                    empty_message: None,
                },
                CategoryReport {
                    category: Category::DifferenceOfOpinion,
                    comments: vec![],
                    empty_message: Some("No statements met the thresholds".to_string()),
                },
            ],
            groups: vec![GroupReport {
                name: "group-0".to_string(),
                vote_count: 30,
                representative: vec![],
            }],
            topics: vec![TopicReport {
                name: "Transit".to_string(),
                comment_count: 1,
                vote_count: 20,
                categories: vec![CategoryReport {
                    category: Category::CommonGround,
                    comments: vec![scored("c1", "More buses at night")],
                    empty_message: None,
                }],
                subtopics: vec![TopicReport {
                    name: "Buses".to_string(),
                    comment_count: 1,
                    vote_count: 20,
                    categories: vec![],
                    subtopics: vec![],
                }],
            }],
        }
    }

    #[test]
    fn test_format_contains_sections() {
        let output = ConsoleFormatter::format(&report());

        assert!(output.contains("Consensus Statistics"));
        assert!(output.contains("group-informed"));
        assert!(output.contains("25%"));
        assert!(output.contains("[c1]"));
        assert!(output.contains("score 0.900"));
        assert!(output.contains("More buses at night"));
        assert!(output.contains("No statements met the thresholds"));
        assert!(output.contains("group-0 (30 votes)"));
        assert!(output.contains("Transit"));
        assert!(output.contains("Buses"));
    }

    #[test]
    fn test_long_text_is_truncated() {
        let long = "word ".repeat(40);
        let line = ConsoleFormatter::format_comment(&scored("c9", &long), "");
        assert!(line.contains("..."));
        assert!(!line.contains(long.trim_end()));
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&report());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comment_count"], 3);
        assert_eq!(value["categories"][1]["category"], "difference_of_opinion");
        assert_eq!(value["topics"][0]["subtopics"][0]["name"], "Buses");
    }

    #[test]
    fn test_trait_delegates() {
        let formatter: &dyn ReportFormatter = &ConsoleFormatter;
        assert_eq!(
            formatter.format_json(&report()),
            ConsoleFormatter::format_json(&report())
        );
    }
}
