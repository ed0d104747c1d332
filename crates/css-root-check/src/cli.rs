//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Reports stylesheet content that escapes its enclosing block.
#[derive(Debug, Parser)]
#[command(name = "css-root-check")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Stylesheet to scan
    #[arg(env = "CSS_ROOT_CHECK_PATH")]
    pub path: Option<Utf8PathBuf>,

    /// First line (1-based, inclusive) of the root-content window
    #[arg(long = "window-start")]
    pub window_start: Option<u32>,

    /// Last line (1-based, inclusive) of the root-content window
    #[arg(long = "window-end")]
    pub window_end: Option<u32>,

    /// Number of characters shown for root-content findings
    #[arg(long = "snippet-len")]
    pub snippet_len: Option<usize>,

    /// Path to a JSON config file (defaults to ./css-root-check.json if present)
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Print a summary line after the findings
    #[arg(long)]
    pub summary: bool,

    /// Exit with status 1 if anything was reported
    #[arg(long = "fail-on-findings")]
    pub fail_on_findings: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Machine-readable (one line per finding, with column)
    Machine,
    /// JSON output
    Json,
}
