// Library error type shared by every pipeline stage.
//
// Every error is fatal to the run: nothing here is retried or recovered.
// The binary wraps these in anyhow with extra context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Empty arguments, empty document sets, bad glob patterns.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A document or folder could not be opened or decoded as UTF-8 text.
    #[error("error reading {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The finished report could not be written.
    #[error("error writing report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The keyword ranking backend refused the input.
    #[error("keyword ranking failed: {0}")]
    Ranking(String),
}

impl ReportError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
