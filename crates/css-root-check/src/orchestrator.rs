//! Main orchestration logic.

use crate::cli::Args;
use crate::config::{ConfigError, FileConfig, ResolvedConfig};
use crate::output::{CheckSummary, Formatter};
use camino::{Utf8Path, Utf8PathBuf};
use css_scan::{read_source, scan, ScanError};
use miette::Diagnostic;
use std::io::{self, Write};
use thiserror::Error;

/// Errors that stop a run. Findings in the stylesheet are never errors.
#[derive(Debug, Error, Diagnostic)]
pub enum CheckError {
    /// Settings could not be resolved.
    #[error(transparent)]
    #[diagnostic(
        code(css_root_check::config),
        help("pass a stylesheet path, set CSS_ROOT_CHECK_PATH, or add \"path\" to css-root-check.json")
    )]
    Config(#[from] ConfigError),

    /// The stylesheet could not be loaded.
    #[error(transparent)]
    #[diagnostic(code(css_root_check::read))]
    Source(#[from] ScanError),

    /// Writing the report failed.
    #[error("failed to write output")]
    #[diagnostic(code(css_root_check::write))]
    Write(#[source] io::Error),
}

/// Runs a check from the current working directory, writing to stdout.
pub fn run(args: Args) -> Result<CheckSummary, CheckError> {
    let working_dir = std::env::current_dir()
        .ok()
        .and_then(|p| Utf8PathBuf::try_from(p).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_in(&args, &working_dir, &mut out)
}

/// Runs a check, resolving a discovered config file against `working_dir`.
pub fn run_in(
    args: &Args,
    working_dir: &Utf8Path,
    out: &mut impl Write,
) -> Result<CheckSummary, CheckError> {
    let file_config = FileConfig::find(args.config.as_deref(), working_dir)?;
    let config = ResolvedConfig::resolve(args, file_config)?;

    let source = read_source(&config.path)?;
    let formatter = Formatter::new(args.output);

    if let Some(banner) = formatter.banner() {
        writeln!(out, "{banner}").map_err(CheckError::Write)?;
    }

    let report = scan(&source, &config.options);
    out.write_all(
        formatter
            .format(&report.diagnostics, &config.path, &source)
            .as_bytes(),
    )
    .map_err(CheckError::Write)?;

    let summary = CheckSummary::from_report(&report, args.fail_on_findings);
    if args.summary {
        writeln!(out, "{}", summary.format()).map_err(CheckError::Write)?;
    }
    out.flush().map_err(CheckError::Write)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::fs;

    struct Fixture {
        _dir: tempfile::TempDir,
        root: Utf8PathBuf,
    }

    impl Fixture {
        fn new(css: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
            fs::write(root.join("site.css"), css).unwrap();
            Self { _dir: dir, root }
        }

        fn run(&self, extra: &[&str]) -> (Result<CheckSummary, CheckError>, String) {
            let css = self.root.join("site.css");
            let argv = ["css-root-check", css.as_str()]
                .into_iter()
                .chain(extra.iter().copied());
            let args = Args::parse_from(argv);

            let mut out = Vec::new();
            let result = run_in(&args, &self.root, &mut out);
            (result, String::from_utf8(out).unwrap())
        }
    }

    #[test]
    fn test_human_output() {
        let fixture = Fixture::new("@import url(a.css);\n.a { color: red; }\n");
        let (result, output) = fixture.run(&[]);

        let summary = result.unwrap();
        assert_eq!(summary.semicolon_count, 1);
        assert!(!summary.should_fail());
        assert_eq!(
            output,
            "Scanning for content at root level (balance 0)...\nSuspicious semicolon at line 1\n"
        );
    }

    #[test]
    fn test_clean_file_prints_only_banner() {
        let fixture = Fixture::new(".a { color: red; }\n.b { width: 10px; }");
        let (result, output) = fixture.run(&[]);

        assert_eq!(result.unwrap().finding_count(), 0);
        assert_eq!(output, "Scanning for content at root level (balance 0)...\n");
    }

    #[test]
    fn test_window_from_discovered_config() {
        let fixture = Fixture::new("a\nb\n");
        fs::write(
            fixture.root.join("css-root-check.json"),
            r#"{ "window_start": 2, "window_end": 2 }"#,
        )
        .unwrap();

        let (result, output) = fixture.run(&["--fail-on-findings"]);
        assert!(result.unwrap().should_fail());
        assert_eq!(
            output,
            "Scanning for content at root level (balance 0)...\nContent at root L2: b\\n\n"
        );
    }

    #[test]
    fn test_json_output_has_no_banner() {
        let fixture = Fixture::new(";");
        let (result, output) = fixture.run(&["--output", "json"]);

        result.unwrap();
        assert!(output.starts_with('['));
        assert!(output.contains("\"code\": \"suspicious-semicolon\""));
    }

    #[test]
    fn test_summary_line() {
        let fixture = Fixture::new("} /* open");
        let (result, output) = fixture.run(&["--summary"]);

        let summary = result.unwrap();
        assert_eq!(summary.final_balance, -1);
        assert!(summary.unterminated_comment);
        assert!(output.ends_with("final balance -1; unterminated comment\n"));
    }

    #[test]
    fn test_missing_stylesheet() {
        let fixture = Fixture::new("");
        fs::remove_file(fixture.root.join("site.css")).unwrap();

        let (result, output) = fixture.run(&[]);
        assert!(matches!(result, Err(CheckError::Source(ScanError::Read { .. }))));
        // Nothing is printed when the file cannot be read.
        assert_eq!(output, "");
    }

    #[test]
    fn test_bad_config_is_reported() {
        let fixture = Fixture::new(".a{}");
        fs::write(fixture.root.join("css-root-check.json"), "{ not json").unwrap();

        let (result, _) = fixture.run(&[]);
        assert!(matches!(
            result,
            Err(CheckError::Config(ConfigError::Parse { .. }))
        ));
    }
}
