// Keyword extraction: ranked phrases to keyword words to stems.
//
// Ranking only picks which roots matter. The second pass over each
// document's full token list collects every surface form of a selected
// stem, including forms the ranker never surfaced.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use super::traits::KeywordRanker;
use crate::corpus::Corpus;
use crate::error::{ReportError, Result};
use crate::text::traits::TextNormalizer;

/// Stem to the surface forms that reduce to it.
pub type StemMap = BTreeMap<String, BTreeSet<String>>;

/// Last whitespace-delimited word of a ranked phrase. Multi-word phrases
/// lose everything but their final word.
fn last_word(phrase: &str) -> Option<&str> {
    phrase.split_whitespace().next_back()
}

/// Rank every document and union the keyword words across the corpus.
pub fn extract_keywords(
    documents: &Corpus,
    ranker: &dyn KeywordRanker,
    count: usize,
) -> Result<BTreeSet<String>> {
    if documents.is_empty() {
        return Err(ReportError::invalid("no documents to scan"));
    }

    let keywords = documents
        .values()
        .try_fold(BTreeSet::new(), |mut acc, text| {
            let phrases = ranker.rank(text, count)?;
            acc.extend(phrases.iter().filter_map(|p| last_word(p)).map(str::to_string));
            Ok::<_, ReportError>(acc)
        })?;

    info!(
        documents = documents.len(),
        keywords = keywords.len(),
        "Extracted keywords"
    );
    Ok(keywords)
}

/// Map each keyword's stem to every surface form of that stem in the corpus.
///
/// Keywords are matched in the normalizer's word forms, so `covid19` selects
/// the token `covid`.
pub fn derive_stems(
    documents: &Corpus,
    keywords: &BTreeSet<String>,
    normalizer: &dyn TextNormalizer,
) -> Result<StemMap> {
    if documents.is_empty() {
        return Err(ReportError::invalid("no documents to scan"));
    }

    // Ranked words may keep digits or capitals that tokens never carry
    let wanted: BTreeSet<String> = keywords
        .iter()
        .flat_map(|k| normalizer.word_forms(k))
        .collect();

    let stems = documents.values().fold(StemMap::new(), |mut acc, text| {
        let tokens = normalizer.tokenize(text);

        let selected: BTreeSet<&str> = tokens
            .iter()
            .filter(|t| wanted.contains(&t.text))
            .map(|t| t.stem.as_str())
            .collect();

        for token in tokens.iter().filter(|t| selected.contains(t.stem.as_str())) {
            acc.entry(token.stem.clone())
                .or_default()
                .insert(token.text.clone());
        }
        acc
    });

    info!(stems = stems.len(), "Derived keyword stems");
    Ok(stems)
}
