//! Byte offsets and spans.

use text_size::TextSize;

/// A byte offset into a stylesheet.
pub type ByteOffset = TextSize;

/// A half-open byte range `[start, end)` in a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: ByteOffset,
    /// The end byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a span from start and end offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Creates a span starting at a `usize` byte position and covering `len`
    /// bytes.
    ///
    /// Stylesheets larger than `u32::MAX` bytes are not supported; offsets are
    /// saturated rather than wrapped.
    pub fn at(pos: usize, len: usize) -> Self {
        let start = u32::try_from(pos).unwrap_or(u32::MAX);
        let end = u32::try_from(pos.saturating_add(len)).unwrap_or(u32::MAX);
        Self::new(start, end)
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
