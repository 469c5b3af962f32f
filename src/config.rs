use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::corpus::loader::DEFAULT_PATTERN;
use crate::output::html::DEFAULT_STYLESHEET;

pub const DEFAULT_FOLDER: &str = "data";
pub const DEFAULT_OUTPUT: &str = "summary.html";
/// Ranked keywords requested per document.
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Run configuration loaded from environment variables.
///
/// Every setting has a default, so a bare run scans `data/*.txt` and writes
/// `summary.html`. The .env file is loaded automatically at startup via
/// dotenvy, and CLI flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Folder scanned for documents (non-recursive)
    pub folder: String,
    /// File-name glob matched inside `folder`
    pub pattern: String,
    /// Report file, overwritten on every run
    pub output: PathBuf,
    pub keyword_count: usize,
    /// Stylesheet href written into the report head. Never generated.
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: DEFAULT_FOLDER.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            keyword_count: DEFAULT_KEYWORD_COUNT,
            stylesheet: DEFAULT_STYLESHEET.to_string(),
        }
    }
}

/// Settings given explicitly on the command line. `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub folder: Option<String>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
    pub keyword_count: Option<usize>,
    pub stylesheet: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `load` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let keyword_count = match lookup("KEYWORD_REPORT_KEYWORDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("KEYWORD_REPORT_KEYWORDS is not a number: {raw:?}"))?,
            None => defaults.keyword_count,
        };

        Ok(Self {
            folder: lookup("KEYWORD_REPORT_FOLDER").unwrap_or(defaults.folder),
            pattern: lookup("KEYWORD_REPORT_PATTERN").unwrap_or(defaults.pattern),
            output: lookup("KEYWORD_REPORT_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            keyword_count,
            stylesheet: lookup("KEYWORD_REPORT_STYLESHEET").unwrap_or(defaults.stylesheet),
        })
    }

    /// Overlay explicit settings on the env-loaded ones.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(folder) = overrides.folder {
            self.folder = folder;
        }
        if let Some(pattern) = overrides.pattern {
            self.pattern = pattern;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(keyword_count) = overrides.keyword_count {
            self.keyword_count = keyword_count;
        }
        if let Some(stylesheet) = overrides.stylesheet {
            self.stylesheet = stylesheet;
        }
    }

    /// Reject settings that could only fail later in the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.folder.is_empty() {
            anyhow::bail!("Document folder is empty. Set KEYWORD_REPORT_FOLDER or pass --folder.");
        }
        if self.pattern.is_empty() {
            anyhow::bail!("File pattern is empty. Set KEYWORD_REPORT_PATTERN or pass --pattern.");
        }
        if self.output.as_os_str().is_empty() {
            anyhow::bail!("Output path is empty. Set KEYWORD_REPORT_OUTPUT or pass --output.");
        }
        if self.keyword_count == 0 {
            anyhow::bail!("Keyword count must be at least 1.");
        }
        Ok(())
    }
}
