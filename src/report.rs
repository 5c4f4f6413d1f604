/*!
 * Reporting functionality for treedump
 *
 * Renders the end-of-run summary with the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::ScanStatistics;
use crate::utils::{format_count, truncate_path};

/// Summary of a finished run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Root directory that was walked
    pub root: String,
    /// Output file path
    pub output_file: String,
    /// Time taken to walk and write
    pub duration: Duration,
    /// Counters from the scanner
    pub statistics: ScanStatistics,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &report.statistics;
        let rows = vec![
            SummaryRow {
                key: "🌳 Root".to_string(),
                value: truncate_path(&report.root, 60),
            },
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: truncate_path(&report.output_file, 60),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: format_count(stats.directories),
            },
            SummaryRow {
                key: "📄 Files".to_string(),
                value: format_count(stats.files),
            },
            SummaryRow {
                key: "📏 Max Depth".to_string(),
                value: stats.max_depth.to_string(),
            },
            SummaryRow {
                key: "⚠️ Skipped".to_string(),
                value: format_count(stats.skipped.len()),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_skipped_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "Directory")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = report
            .statistics
            .skipped
            .iter()
            .map(|skipped| SkippedRow {
                path: truncate_path(&skipped.path.to_string_lossy(), 60),
                reason: skipped.reason.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary = format!(
            "✅  TREE WRITTEN\n{}",
            self.create_summary_table(report)
        );

        if report.statistics.skipped.is_empty() {
            return summary;
        }

        format!(
            "⚠️  SKIPPED DIRECTORIES\n{}\n\n{}",
            self.create_skipped_table(report),
            summary
        )
    }
}
