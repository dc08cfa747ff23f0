//! Plain-text report rendering and export placeholders.

use crate::model::selection::SelectionSet;
use crate::model::timestamp::display_timestamp;
use crate::report::summary::ReportSummary;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

/// Report title used when the caller does not configure one.
pub const DEFAULT_REPORT_TITLE: &str = "FORENSIC INVESTIGATION REPORT";

const EXPORT_BASENAME: &str = "Report_Case_2024_03";

/// Renders the copyable text report for `selection`.
pub fn render_report_text(title: &str, selection: &SelectionSet<'_>) -> String {
    let summary = ReportSummary::from_selection(selection);
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(report, "=== {} ===", title.trim());
    let _ = writeln!(report);
    let _ = writeln!(report, "Executive Summary:");
    let _ = writeln!(
        report,
        "Investigation reveals coordinated financial transactions and meeting arrangements \
         between multiple suspects. {} pieces of evidence analyzed with full chain-of-custody \
         documentation.",
        summary.total_items
    );
    let _ = writeln!(report);
    let _ = writeln!(report, "Key Findings:");
    let _ = writeln!(
        report,
        "- {} financial transaction discussions",
        summary.financial_count
    );
    let _ = writeln!(report, "- {} recovered deleted messages", summary.deleted_count);
    let _ = writeln!(
        report,
        "- {} unique individuals identified",
        summary.unique_individuals
    );
    let _ = writeln!(report);
    let _ = writeln!(report, "Evidence Annexure:");
    for (index, record) in selection.iter().enumerate() {
        let _ = writeln!(
            report,
            "{}. [{}] {} - \"{}\"",
            index + 1,
            record.message_id,
            display_timestamp(&record.timestamp),
            record.text
        );
    }

    report
}

/// Requested export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Bibtex,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self, UnknownExportFormat> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            "bibtex" | "bib" => Ok(Self::Bibtex),
            other => Err(UnknownExportFormat(other.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Bibtex => "bib",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExportFormat(pub String);

impl Display for UnknownExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported export format `{}`; expected pdf|csv|bibtex",
            self.0
        )
    }
}

impl Error for UnknownExportFormat {}

/// Result of an export request. Nothing is written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNotice {
    pub format: ExportFormat,
    pub file_name: String,
    pub item_count: usize,
    pub written: bool,
}

impl ExportNotice {
    pub fn message(&self) -> String {
        format!(
            "{} would be generated with {} item(s); export is a demo feature and no file was written",
            self.file_name, self.item_count
        )
    }
}

/// Acknowledges an export of `selection` without producing a file.
pub fn export_placeholder(format: ExportFormat, selection: &SelectionSet<'_>) -> ExportNotice {
    let notice = ExportNotice {
        format,
        file_name: format!("{EXPORT_BASENAME}.{}", format.extension()),
        item_count: selection.len(),
        written: false,
    };
    info!(
        "event=report_export module=report status=skipped format={} items={}",
        format.extension(),
        notice.item_count
    );
    notice
}
