//! Output formatting.

use crate::cli::OutputFormat;
use camino::Utf8Path;
use css_scan::{Diagnostic, DiagnosticCode, ScanReport};
use serde::Serialize;
use source_span::{ByteOffset, LineIndex};

/// Printed once before the scan starts, in human output.
pub const BANNER: &str = "Scanning for content at root level (balance 0)...";

/// A formatted diagnostic for JSON output.
#[derive(Debug, Serialize)]
pub struct FormattedDiagnostic {
    /// The severity (`Warning`).
    #[serde(rename = "type")]
    pub diagnostic_type: String,
    /// The stylesheet path.
    pub filename: String,
    /// The start position.
    pub start: Position,
    /// The end position.
    pub end: Position,
    /// The console message.
    pub message: String,
    /// The diagnostic code.
    pub code: String,
    /// The escaped snippet, for root-content findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// A position in the stylesheet.
#[derive(Debug, Serialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Byte offset.
    pub offset: u32,
}

impl Position {
    fn resolve(line_index: &LineIndex<'_>, offset: ByteOffset) -> Self {
        let pos = line_index.position(offset).unwrap_or_default();
        Self {
            line: pos.line,
            column: pos.column,
            offset: u32::from(offset),
        }
    }
}

/// Formats diagnostics for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the line printed before scanning, if this format has one.
    pub fn banner(&self) -> Option<&'static str> {
        match self.format {
            OutputFormat::Human => Some(BANNER),
            OutputFormat::Machine | OutputFormat::Json => None,
        }
    }

    /// Formats a collection of diagnostics.
    pub fn format(&self, diagnostics: &[Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        match self.format {
            OutputFormat::Human => Self::format_human(diagnostics),
            OutputFormat::Machine => Self::format_machine(diagnostics, file_path, source),
            OutputFormat::Json => Self::format_json(diagnostics, file_path, source),
        }
    }

    /// One console line per finding, in scan order.
    fn format_human(diagnostics: &[Diagnostic]) -> String {
        let mut output = String::new();
        for diag in diagnostics {
            output.push_str(&diag.message);
            output.push('\n');
        }
        output
    }

    /// Formats as machine-readable output.
    fn format_machine(diagnostics: &[Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        let line_index = LineIndex::new(source);
        let mut output = String::new();

        for diag in diagnostics {
            let start = Position::resolve(&line_index, diag.span.start);
            output.push_str(&format!(
                "{} {}:{}:{} {} ({})\n",
                diag.severity.as_str(),
                file_path,
                start.line,
                start.column,
                diag.message,
                diag.code
            ));
        }

        output
    }

    /// Formats as JSON output.
    fn format_json(diagnostics: &[Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        let formatted = Self::format_json_diagnostics(diagnostics, file_path, source);
        // Only plain strings and integers are serialized, which cannot fail.
        serde_json::to_string_pretty(&formatted).unwrap_or_default() + "\n"
    }

    /// Formats diagnostics into JSON-ready structs.
    pub fn format_json_diagnostics(
        diagnostics: &[Diagnostic],
        file_path: &Utf8Path,
        source: &str,
    ) -> Vec<FormattedDiagnostic> {
        let line_index = LineIndex::new(source);
        diagnostics
            .iter()
            .map(|diag| FormattedDiagnostic {
                diagnostic_type: match diag.severity {
                    css_scan::Severity::Warning => "Warning".to_string(),
                },
                filename: file_path.to_string(),
                start: Position::resolve(&line_index, diag.span.start),
                end: Position::resolve(&line_index, diag.span.end),
                message: diag.message.clone(),
                code: diag.code.to_string(),
                snippet: diag.snippet.clone(),
            })
            .collect()
    }
}

/// Summary of a check run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of `suspicious-semicolon` findings.
    pub semicolon_count: usize,
    /// Number of `root-content` findings.
    pub root_content_count: usize,
    /// Brace balance at end of input.
    pub final_balance: i64,
    /// Whether the file ends inside a comment.
    pub unterminated_comment: bool,
    /// Whether findings should fail the run.
    pub fail_on_findings: bool,
}

impl CheckSummary {
    /// Builds a summary from a finished scan.
    pub fn from_report(report: &ScanReport, fail_on_findings: bool) -> Self {
        let count = |code: DiagnosticCode| {
            report
                .diagnostics
                .iter()
                .filter(|d| d.code == code)
                .count()
        };
        Self {
            semicolon_count: count(DiagnosticCode::SuspiciousSemicolon),
            root_content_count: count(DiagnosticCode::RootContent),
            final_balance: report.final_state.balance,
            unterminated_comment: report.final_state.in_comment,
            fail_on_findings,
        }
    }

    /// Total number of findings.
    pub fn finding_count(&self) -> usize {
        self.semicolon_count + self.root_content_count
    }

    /// Returns true if the process should exit with a failure status.
    pub fn should_fail(&self) -> bool {
        self.fail_on_findings && self.finding_count() > 0
    }

    /// Formats the summary line.
    pub fn format(&self) -> String {
        let finding_word = if self.finding_count() == 1 {
            "finding"
        } else {
            "findings"
        };

        let mut line = format!(
            "====================================\n\
             css-root-check found {} {} ({} suspicious semicolon, {} root content); \
             final balance {}",
            self.finding_count(),
            finding_word,
            self.semicolon_count,
            self.root_content_count,
            self.final_balance
        );
        if self.unterminated_comment {
            line.push_str("; unterminated comment");
        }
        line
    }
}
