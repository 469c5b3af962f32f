// Occurrence indexing: which sentences, in which documents, mention each stem.

use std::collections::{BTreeMap, BTreeSet};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::corpus::Corpus;
use crate::keywords::stems::StemMap;
use crate::text::traits::{SentenceUnit, TextNormalizer};

/// Everything the report shows for one stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub stem: String,
    /// Surface forms of the stem, sorted
    pub words: Vec<String>,
    /// Matched sentences across all documents. Always equals the total
    /// length of the lists in `sentences`.
    pub sentence_count: usize,
    /// Document id to its matched sentence texts, in document order
    pub sentences: BTreeMap<String, Vec<String>>,
    /// Documents with at least one matched sentence, sorted
    pub documents: Vec<String>,
}

impl ReportEntry {
    fn scan<'a>(
        stem: &str,
        words: &BTreeSet<String>,
        segmented: impl IntoIterator<Item = (&'a String, &'a [SentenceUnit])>,
    ) -> Self {
        let mut sentence_count = 0;
        let mut sentences: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut documents = BTreeSet::new();

        for (doc, units) in segmented {
            for unit in units.iter().filter(|u| u.contains_stem(stem)) {
                sentence_count += 1;
                sentences
                    .entry(doc.clone())
                    .or_default()
                    .push(unit.text.clone());
                documents.insert(doc.clone());
            }
        }

        Self {
            stem: stem.to_string(),
            words: words.iter().cloned().collect(),
            sentence_count,
            sentences,
            documents: documents.into_iter().collect(),
        }
    }
}

/// Build one entry per stem, in stem-map order.
///
/// Stems that match no sentence still get an entry with a zero count.
pub fn build_entries(
    documents: &Corpus,
    stems: &StemMap,
    normalizer: &dyn TextNormalizer,
) -> Vec<ReportEntry> {
    let segmented: Vec<(&String, Vec<SentenceUnit>)> = documents
        .iter()
        .map(|(id, text)| (id, normalizer.sentences(text)))
        .collect();

    let pb = ProgressBar::new(stems.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("  Indexing [{bar:30}] {pos}/{len} stems")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let entries: Vec<ReportEntry> = stems
        .iter()
        .map(|(stem, words)| {
            let entry = ReportEntry::scan(
                stem,
                words,
                segmented.iter().map(|(id, units)| (*id, units.as_slice())),
            );
            pb.inc(1);
            entry
        })
        .collect();
    pb.finish_and_clear();

    info!(
        entries = entries.len(),
        sentences = segmented.iter().map(|(_, u)| u.len()).sum::<usize>(),
        "Indexed stem occurrences"
    );
    entries
}

/// Order entries by sentence count, highest first. The sort is stable, so
/// ties keep the order they were built in.
pub fn sort_entries(mut entries: Vec<ReportEntry>) -> Vec<ReportEntry> {
    entries.sort_by(|a, b| b.sentence_count.cmp(&a.sentence_count));
    entries
}
