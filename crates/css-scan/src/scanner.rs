//! The single-pass root-level scanner.
//!
//! Each step looks at the character under the cursor and applies the first
//! matching rule, in this order:
//!
//! 1. `\n` bumps the line counter (also inside comments)
//! 2. `/*` opens a comment when not already in one
//! 3. inside a comment everything is skipped until `*/`
//! 4. `{` and `}` adjust the balance
//! 5. anything else is checked for root-level findings when balance is 0

use crate::{Diagnostic, ScanOptions};
use source_span::Span;

/// Scanner state after some prefix of the text has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// Opening braces seen minus closing braces seen, outside comments.
    /// Goes negative on stray `}` and is never clamped.
    pub balance: i64,
    /// True between `/*` and the next `*/`.
    pub in_comment: bool,
    /// 1-based line number.
    pub line: u32,
    /// Byte offset of the next character to examine.
    pub cursor: usize,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            balance: 0,
            in_comment: false,
            line: 1,
            cursor: 0,
        }
    }
}

impl ScanState {
    /// Returns true at nesting depth zero.
    #[inline]
    pub fn at_root(&self) -> bool {
        self.balance == 0
    }
}

/// The outcome of scanning a whole stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Findings in the order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
    /// The state at end of input.
    pub final_state: ScanState,
}

impl ScanReport {
    /// Returns true if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Scans `text` in one pass and collects every finding.
pub fn scan(text: &str, options: &ScanOptions) -> ScanReport {
    tracing::debug!(
        bytes = text.len(),
        window_start = options.window.start(),
        window_end = options.window.end(),
        "scanning for content at root level"
    );

    let mut scanner = Scanner::new(text, options);
    let diagnostics: Vec<_> = scanner.by_ref().collect();
    let final_state = scanner.into_state();

    tracing::debug!(
        findings = diagnostics.len(),
        balance = final_state.balance,
        in_comment = final_state.in_comment,
        lines = final_state.line,
        "scan finished"
    );

    ScanReport {
        diagnostics,
        final_state,
    }
}

/// An iterator over the findings in a stylesheet.
///
/// The scan advances lazily; each call to `next` consumes characters until
/// the next finding or the end of the text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    options: &'a ScanOptions,
    state: ScanState,
    /// A second finding produced by the same character as the last one.
    pending: Option<Diagnostic>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `text`.
    pub fn new(text: &'a str, options: &'a ScanOptions) -> Self {
        Self {
            text,
            options,
            state: ScanState::default(),
            pending: None,
        }
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Consumes the scanner, returning its current state.
    #[inline]
    pub fn into_state(self) -> ScanState {
        self.state
    }

    /// Advances past one character (or one comment delimiter) and returns the
    /// first finding it produced, if any.
    fn step(&mut self) -> Option<Diagnostic> {
        let start = self.state.cursor;
        let rest = &self.text[start..];
        let ch = rest.chars().next()?;

        if ch == '\n' {
            self.state.line += 1;
            self.state.cursor += 1;
            return None;
        }

        if !self.state.in_comment && rest.starts_with("/*") {
            self.state.in_comment = true;
            self.state.cursor += 2;
            return None;
        }

        if self.state.in_comment {
            if rest.starts_with("*/") {
                self.state.in_comment = false;
                self.state.cursor += 2;
            } else {
                self.state.cursor += ch.len_utf8();
            }
            return None;
        }

        self.state.cursor += ch.len_utf8();
        match ch {
            '{' => {
                self.state.balance += 1;
                None
            }
            '}' => {
                self.state.balance -= 1;
                None
            }
            _ if !self.state.at_root() => None,
            _ => self.check_root(ch, start),
        }
    }

    /// Applies the root-level checks to `ch` at byte offset `start`.
    fn check_root(&mut self, ch: char, start: usize) -> Option<Diagnostic> {
        let line = self.state.line;

        let semicolon =
            (ch == ';').then(|| Diagnostic::suspicious_semicolon(line, Span::at(start, 1)));

        let content = (self.options.window.contains(line) && !is_space(ch)).then(|| {
            let (snippet, len) = snippet(&self.text[start..], self.options.snippet_len);
            Diagnostic::root_content(line, Span::at(start, len), snippet)
        });

        match semicolon {
            Some(semicolon) => {
                self.pending = content;
                Some(semicolon)
            }
            None => content,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }

        while self.state.cursor < self.text.len() {
            if let Some(diagnostic) = self.step() {
                tracing::trace!(code = %diagnostic.code, line = diagnostic.line, "finding");
                return Some(diagnostic);
            }
        }

        None
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (`\x1c`..=`\x1f`), which stylesheet tooling also treats as blank.
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\x1c'..='\x1f')
}

/// Takes up to `max_chars` characters from the start of `text`, clamped at the
/// end of the text, and escapes newlines as a literal `\n`.
///
/// Returns the escaped snippet and the number of raw bytes it covers.
fn snippet(text: &str, max_chars: usize) -> (String, usize) {
    let raw_len = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(offset, _)| offset);
    (text[..raw_len].replace('\n', "\\n"), raw_len)
}
