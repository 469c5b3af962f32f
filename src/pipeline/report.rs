// Report pipeline: load, extract, index, render, write.
//
// Each stage finishes completely before the next starts. Any error aborts
// the run and no partial report is written.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::corpus::loader::load_folder;
use crate::error::{ReportError, Result};
use crate::index::entry::{build_entries, sort_entries, ReportEntry};
use crate::keywords::stems::{derive_stems, extract_keywords};
use crate::keywords::traits::KeywordRanker;
use crate::output::html::render;
use crate::output::pretty::prettify;
use crate::text::traits::TextNormalizer;

/// What a finished run produced.
#[derive(Debug)]
pub struct ReportSummary {
    pub document_count: usize,
    /// Entries in report order (sentence count descending)
    pub entries: Vec<ReportEntry>,
    pub output: PathBuf,
}

/// Render entries into the final pretty-printed HTML document.
pub fn render_report(
    entries: &[ReportEntry],
    document_ids: &[String],
    normalizer: &dyn TextNormalizer,
    stylesheet: &str,
) -> String {
    prettify(&render(entries, document_ids, normalizer, stylesheet))
}

/// Write the report, replacing any existing file.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the whole pipeline for `config` and write the report file.
pub fn generate(
    config: &Config,
    ranker: &dyn KeywordRanker,
    normalizer: &dyn TextNormalizer,
) -> Result<ReportSummary> {
    let corpus = load_folder(&config.folder, &config.pattern)?;
    info!(
        folder = config.folder.as_str(),
        pattern = config.pattern.as_str(),
        documents = corpus.len(),
        "Loaded documents"
    );

    let keywords = extract_keywords(&corpus, ranker, config.keyword_count)?;
    let stems = derive_stems(&corpus, &keywords, normalizer)?;
    let entries = sort_entries(build_entries(&corpus, &stems, normalizer));

    let document_ids: Vec<String> = corpus.keys().cloned().collect();
    let html = render_report(&entries, &document_ids, normalizer, &config.stylesheet);
    write_report(&config.output, &html)?;

    info!(
        output = %config.output.display(),
        entries = entries.len(),
        bytes = html.len(),
        "Wrote report"
    );

    Ok(ReportSummary {
        document_count: corpus.len(),
        entries,
        output: config.output.clone(),
    })
}
