//! Configuration loading.
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, a JSON config file, and built-in defaults.

use crate::cli::Args;
use camino::{Utf8Path, Utf8PathBuf};
use css_scan::{InvalidWindow, LineWindow, ScanOptions};
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "css-root-check.json";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has unknown keys.
    #[error("failed to parse config file {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No stylesheet was named anywhere.
    #[error("no stylesheet path given")]
    MissingPath,

    /// The line window is inverted.
    #[error(transparent)]
    InvalidWindow(#[from] InvalidWindow),
}

/// Contents of a `css-root-check.json` file.
///
/// ```json
/// { "path": "styles.css", "window_start": 2420, "window_end": 2440 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Stylesheet to scan. Relative paths resolve against the config file's
    /// directory.
    pub path: Option<Utf8PathBuf>,
    /// First line of the root-content window.
    pub window_start: Option<u32>,
    /// Last line of the root-content window.
    pub window_end: Option<u32>,
    /// Characters shown for root-content findings.
    pub snippet_len: Option<usize>,
}

impl FileConfig {
    /// Loads a config file.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let (Some(stylesheet), Some(dir)) = (config.path.as_mut(), path.parent()) {
            if stylesheet.is_relative() {
                *stylesheet = dir.join(&*stylesheet);
            }
        }

        Ok(config)
    }

    /// Loads the config named by `--config`, or `css-root-check.json` in
    /// `working_dir` if it exists. Returns an empty config otherwise.
    pub fn find(
        explicit: Option<&Utf8Path>,
        working_dir: &Utf8Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = working_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(%path, "using discovered config file");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Stylesheet to scan.
    pub path: Utf8PathBuf,
    /// Options handed to the scanner.
    pub options: ScanOptions,
}

impl ResolvedConfig {
    /// Merges command-line flags over a config file over defaults.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = ScanOptions::default();

        let path = args
            .path
            .clone()
            .or(file.path)
            .ok_or(ConfigError::MissingPath)?;

        let window_start = args
            .window_start
            .or(file.window_start)
            .unwrap_or(defaults.window.start());
        let window_end = args
            .window_end
            .or(file.window_end)
            .unwrap_or(defaults.window.end());
        let snippet_len = args
            .snippet_len
            .or(file.snippet_len)
            .unwrap_or(defaults.snippet_len);

        let options = ScanOptions::default()
            .with_window(LineWindow::new(window_start, window_end)?)
            .with_snippet_len(snippet_len);

        tracing::debug!(%path, window_start, window_end, snippet_len, "resolved config");

        Ok(Self { path, options })
    }
}
