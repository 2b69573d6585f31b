/*!
 * Reporting functionality for treecat
 *
 * Renders a summary of an aggregation run as console tables using the
 * tabled library. The report goes to stderr so the aggregated output
 * on stdout stays clean.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::aggregate::AggregateStats;

/// Information about one emitted file in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics for one batch run, across all given paths
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Time taken for the whole run
    pub duration: Duration,
    /// Aggregation counters, merged over all paths
    pub stats: AggregateStats,
}

impl ScanReport {
    /// Fold another path's statistics into the report
    pub fn absorb(&mut self, stats: AggregateStats) {
        self.stats.files_emitted += stats.files_emitted;
        self.stats.binaries_skipped += stats.binaries_skipped;
        self.stats.oversized_skipped += stats.oversized_skipped;
        self.stats.read_errors += stats.read_errors;
        self.stats.bytes_written += stats.bytes_written;
        self.stats.file_details.extend(stats.file_details);
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for aggregation runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stderr
    pub fn print_report(&self, report: &ScanReport) {
        eprintln!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &report.stats;
        let total_chars: usize = stats.file_details.values().map(|f| f.chars).sum();
        let estimated_tokens = total_chars / 4;

        let rows = vec![
            SummaryRow {
                key: "Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "Files Emitted".to_string(),
                value: self.format_number(stats.files_emitted),
            },
            SummaryRow {
                key: "Binaries Skipped".to_string(),
                value: self.format_number(stats.binaries_skipped),
            },
            SummaryRow {
                key: "Oversized Skipped".to_string(),
                value: self.format_number(stats.oversized_skipped),
            },
            SummaryRow {
                key: "Read Errors".to_string(),
                value: self.format_number(stats.read_errors),
            },
            SummaryRow {
                key: "Bytes Written".to_string(),
                value: self.format_number(stats.bytes_written),
            },
            SummaryRow {
                key: "Est. LLM Tokens".to_string(),
                value: self.format_number(estimated_tokens),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        // Sort files by character count, largest first
        let mut files: Vec<_> = report.stats.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        let files_to_show = if files.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: (*path).clone(),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
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
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let files_title = if report.stats.file_details.len() > 15 {
            "TOP 10 LARGEST FILES BY CHARACTER COUNT"
        } else {
            "EMITTED FILES"
        };

        format!(
            "{}\n{}\n\nAGGREGATION COMPLETE\n{}",
            files_title, files_table, summary_table
        )
    }
}
