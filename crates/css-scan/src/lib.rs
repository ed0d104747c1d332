//! Root-level content scanner for stylesheets.
//!
//! The scanner walks a stylesheet once, tracking brace balance and block
//! comment state, and reports:
//! - semicolons that appear at root level (balance 0)
//! - non-whitespace root-level content inside a configured line window
//!
//! It does not tokenize selectors or declarations; braces and `/* */`
//! comments are the only structure it understands.
//!
//! # Example
//!
//! ```
//! use css_scan::{scan, DiagnosticCode, ScanOptions};
//!
//! let report = scan("@import url(a.css);\n.a { color: red; }", &ScanOptions::default());
//!
//! assert_eq!(report.diagnostics.len(), 1);
//! assert_eq!(report.diagnostics[0].code, DiagnosticCode::SuspiciousSemicolon);
//! assert_eq!(report.final_state.balance, 0);
//! ```

mod diagnostic;
mod error;
mod options;
mod scanner;
mod source;

pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use error::ScanError;
pub use options::{InvalidWindow, LineWindow, ScanOptions};
pub use scanner::{scan, ScanReport, ScanState, Scanner};
pub use source::{normalize_newlines, read_source};
