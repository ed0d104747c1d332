//! Scan options.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Default first line of the root-content window.
pub const DEFAULT_WINDOW_START: u32 = 2420;
/// Default last line of the root-content window.
pub const DEFAULT_WINDOW_END: u32 = 2440;
/// Default number of characters echoed for root-content findings.
pub const DEFAULT_SNIPPET_LEN: usize = 20;

/// An inclusive, 1-based range of lines in which root-level content is
/// echoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    start: u32,
    end: u32,
}

/// A window whose start line comes after its end line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line window start ({start}) is after its end ({end})")]
pub struct InvalidWindow {
    /// The requested first line.
    pub start: u32,
    /// The requested last line.
    pub end: u32,
}

impl LineWindow {
    /// Creates a window covering `start..=end`.
    pub fn new(start: u32, end: u32) -> Result<Self, InvalidWindow> {
        if start > end {
            return Err(InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The first line of the window.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The last line of the window.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns true if `line` lies within the window, bounds included.
    #[inline]
    pub fn contains(&self, line: u32) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

impl Default for LineWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
        }
    }
}

impl TryFrom<RangeInclusive<u32>> for LineWindow {
    type Error = InvalidWindow;

    fn try_from(range: RangeInclusive<u32>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

/// Options for a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Lines in which root-level content is echoed.
    pub window: LineWindow,
    /// Maximum number of characters in a root-content snippet.
    pub snippet_len: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            window: LineWindow::default(),
            snippet_len: DEFAULT_SNIPPET_LEN,
        }
    }
}

impl ScanOptions {
    /// Sets the line window.
    pub fn with_window(mut self, window: LineWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the snippet length.
    pub fn with_snippet_len(mut self, snippet_len: usize) -> Self {
        self.snippet_len = snippet_len;
        self
    }
}
