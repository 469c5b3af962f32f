// Text normalizer trait: the swap-ready tokenizer/stemmer abstraction.
//
// Keyword extraction, sentence indexing, and highlighting all see text
// through this trait, so the orchestration can be tested against any
// backend. The default implementation is SnowballNormalizer.

/// A normalized word: its stem and the lowercase surface text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub stem: String,
    pub text: String,
}

/// One sentence of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    /// The sentence as it appears in the document
    pub text: String,
    /// Space-joined stems of the sentence's content words
    pub token: String,
}

impl SentenceUnit {
    /// Exact token match against the normalized stream, never a substring test.
    pub fn contains_stem(&self, stem: &str) -> bool {
        self.token.split(' ').any(|t| t == stem)
    }
}

pub trait TextNormalizer {
    /// Distinct content words of `text`, in first-seen order, one token per
    /// surface text. Stop words and words that normalize to nothing are dropped.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Segment `text` into sentences. Sentences with no content words are dropped.
    fn sentences(&self, text: &str) -> Vec<SentenceUnit>;

    /// Lowercase word pieces of a single display word, unstemmed.
    /// Used to test a word against a set of surface forms.
    fn word_forms(&self, word: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_stem_is_exact() {
        let unit = SentenceUnit {
            text: "testing functions.".to_string(),
            token: "test function".to_string(),
        };
        assert!(unit.contains_stem("test"));
        assert!(unit.contains_stem("function"));
        assert!(!unit.contains_stem("tes"));
        assert!(!unit.contains_stem("func"));
    }
}
