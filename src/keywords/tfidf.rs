// TF-IDF keyword ranking.
//
// Uses the `keyword_extraction` crate. Each sentence of the document is
// treated as a separate TF-IDF document, so words spread across the whole
// text are downweighted against words concentrated in a few sentences.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::traits::KeywordRanker;
use crate::error::Result;
use crate::text::sentences::split_sentences;

/// TF-IDF ranker, the default KeywordRanker.
pub struct TfIdfRanker {
    stop_words: Vec<String>,
}

impl Default for TfIdfRanker {
    fn default() -> Self {
        Self {
            stop_words: get(LANGUAGE::English),
        }
    }
}

impl KeywordRanker for TfIdfRanker {
    fn rank(&self, text: &str, count: usize) -> Result<Vec<String>> {
        let sentences = split_sentences(text);
        if sentences.is_empty() || count == 0 {
            return Ok(Vec::new());
        }

        let params = TfIdfParams::UnprocessedDocuments(&sentences, &self.stop_words, None);
        let tfidf = TfIdf::new(params);
        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(count);

        if let Some((top, score)) = ranked.first() {
            debug!(
                sentences = sentences.len(),
                keywords = ranked.len(),
                top_keyword = top.as_str(),
                top_score = *score,
                "Ranked TF-IDF keywords"
            );
        }

        Ok(ranked.into_iter().map(|(word, _)| word).collect())
    }
}
