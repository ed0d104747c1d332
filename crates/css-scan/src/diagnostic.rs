//! Diagnostic types.

use source_span::Span;

/// A finding reported by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The diagnostic code.
    pub code: DiagnosticCode,
    /// The severity level.
    pub severity: Severity,
    /// The console line for this finding.
    pub message: String,
    /// 1-based line the scanner was on when the finding fired.
    pub line: u32,
    /// The source location.
    pub span: Span,
    /// Escaped root-level content, for `root-content` findings.
    pub snippet: Option<String>,
}

impl Diagnostic {
    /// A `;` seen at root level.
    pub fn suspicious_semicolon(line: u32, span: Span) -> Self {
        let code = DiagnosticCode::SuspiciousSemicolon;
        Self {
            severity: code.default_severity(),
            code,
            message: format!("Suspicious semicolon at line {line}"),
            line,
            span,
            snippet: None,
        }
    }

    /// Non-whitespace root-level content inside the line window.
    pub fn root_content(line: u32, span: Span, snippet: String) -> Self {
        let code = DiagnosticCode::RootContent;
        Self {
            severity: code.default_severity(),
            code,
            message: format!("Content at root L{line}: {snippet}"),
            line,
            span,
            snippet: Some(snippet),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// The severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Something that is probably a mistake in the stylesheet.
    Warning,
}

impl Severity {
    /// Returns the severity as an upper-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
        }
    }
}

/// Diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// `suspicious-semicolon`: `;` outside any block
    SuspiciousSemicolon,
    /// `root-content`: content at root level within the line window
    RootContent,
}

impl DiagnosticCode {
    /// Returns the default severity for this code.
    pub fn default_severity(&self) -> Severity {
        match self {
            DiagnosticCode::SuspiciousSemicolon | DiagnosticCode::RootContent => Severity::Warning,
        }
    }

    /// Returns the diagnostic code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::SuspiciousSemicolon => "suspicious-semicolon",
            DiagnosticCode::RootContent => "root-content",
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
