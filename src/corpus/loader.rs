// Document loading: single files and flat folder scans.

use std::fs;
use std::io;
use std::path::Path;

use globset::Glob;
use tracing::debug;
use walkdir::WalkDir;

use super::Corpus;
use crate::error::{ReportError, Result};

/// Default file-name pattern for `load_folder`.
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Read one document as UTF-8 text.
pub fn read_file(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(ReportError::invalid("empty filename"));
    }

    fs::read_to_string(path).map_err(|source| ReportError::NotFound {
        path: path.into(),
        source,
    })
}

/// Load every file directly inside `folder` whose name matches `pattern`.
///
/// Keys are the joined paths (`folder/name`), so they can be linked from the
/// report as-is. Subdirectories are not descended into. Symlinks to files are
/// loaded through the link. Dot-prefixed names are hidden unless `pattern`
/// itself starts with a dot. A folder with no matching files yields an empty
/// corpus.
pub fn load_folder(folder: &str, pattern: &str) -> Result<Corpus> {
    if folder.is_empty() {
        return Err(ReportError::invalid("empty folder name"));
    }

    let matcher = Glob::new(pattern)
        .map_err(|e| ReportError::invalid(format!("bad file pattern {pattern:?}: {e}")))?
        .compile_matcher();

    let show_hidden = pattern.starts_with('.');
    let mut corpus = Corpus::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| folder.into());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop"));
            ReportError::NotFound { path, source }
        })?;

        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if (hidden && !show_hidden) || !matcher.is_match(entry.file_name()) {
            continue;
        }
        // Follows symlinks; dangling links and directories are skipped
        if !entry.path().is_file() {
            continue;
        }

        let id = entry.path().display().to_string();
        let text = read_file(&id)?;
        debug!(document = %id, bytes = text.len(), "Loaded document");
        corpus.insert(id, text);
    }

    Ok(corpus)
}
