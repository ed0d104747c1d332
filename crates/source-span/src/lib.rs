//! Source positions for css-root-check.
//!
//! Findings are recorded as byte spans into the scanned stylesheet. This crate
//! turns those spans into human-facing line/column positions when a report is
//! rendered.

mod line_index;
mod span;

pub use line_index::{LineIndex, Position};
pub use span::{ByteOffset, Span};
