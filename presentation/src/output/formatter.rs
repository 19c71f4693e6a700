//! Output formatter trait

use sensemaker_application::AnalysisReport;

/// Trait for formatting analysis reports
pub trait ReportFormatter {
    /// Format the complete report
    fn format(&self, report: &AnalysisReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &AnalysisReport) -> String;
}
