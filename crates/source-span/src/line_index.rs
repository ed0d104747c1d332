//! Offset to line/column lookup.

use crate::ByteOffset;
use text_size::TextSize;

/// A 1-based line and column in a stylesheet.
///
/// Columns count characters, not bytes, so a position points at the same
/// glyph an editor would show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Start offsets of every line in a stylesheet.
///
/// Lines are split on `\n` only, matching how the scanner counts lines.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// `line_starts[i]` is the offset where line `i + 1` begins.
    line_starts: Vec<ByteOffset>,
}

impl<'a> LineIndex<'a> {
    /// Builds an index over `text`.
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(offset, _)| TextSize::from((offset + 1) as u32)),
        );
        Self { text, line_starts }
    }

    /// Resolves a byte offset to a 1-based position.
    ///
    /// Returns `None` if the offset lies past the end of the text or inside a
    /// multi-byte character.
    pub fn position(&self, offset: ByteOffset) -> Option<Position> {
        let raw = usize::from(offset);
        if raw > self.text.len() || !self.text.is_char_boundary(raw) {
            return None;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let line_start = usize::from(self.line_starts[line]);
        let column = self.text[line_start..raw].chars().count();

        Some(Position::new(line as u32 + 1, column as u32 + 1))
    }
}
