// Snowball-stemmer normalizer: the default TextNormalizer.
//
// Words are lowercase alphabetic runs. Stop words and words shorter than
// three characters are dropped, and the rest are reduced with the English
// Snowball stemmer.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};

use super::sentences::split_sentences;
use super::traits::{SentenceUnit, TextNormalizer, Token};

/// Words shorter than this are never content words.
const MIN_WORD_CHARS: usize = 3;

pub struct SnowballNormalizer {
    stemmer: Stemmer,
    stop_words: HashSet<String>,
}

impl Default for SnowballNormalizer {
    fn default() -> Self {
        Self::with_stop_words(get(LANGUAGE::English))
    }
}

impl SnowballNormalizer {
    /// Normalizer with a caller-supplied stop word list instead of the
    /// bundled English one.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            stop_words: words
                .into_iter()
                .map(|w| Into::<String>::into(w).to_lowercase())
                .collect(),
        }
    }

    /// Stem a lowercase word, or `None` if it is not a content word.
    fn normalize(&self, word: &str) -> Option<String> {
        if word.chars().count() < MIN_WORD_CHARS || self.stop_words.contains(word) {
            return None;
        }
        Some(self.stemmer.stem(word).into_owned())
    }
}

/// Lowercase alphabetic runs of `text`.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

impl TextNormalizer for SnowballNormalizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut seen = HashSet::new();
        words(text)
            .filter(|w| seen.insert(w.clone()))
            .filter_map(|w| self.normalize(&w).map(|stem| Token { stem, text: w }))
            .collect()
    }

    fn sentences(&self, text: &str) -> Vec<SentenceUnit> {
        split_sentences(text)
            .into_iter()
            .filter_map(|sentence| {
                let token = words(&sentence)
                    .filter_map(|w| self.normalize(&w))
                    .collect::<Vec<_>>()
                    .join(" ");
                (!token.is_empty()).then_some(SentenceUnit {
                    text: sentence,
                    token,
                })
            })
            .collect()
    }

    fn word_forms(&self, word: &str) -> Vec<String> {
        words(word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> SnowballNormalizer {
        SnowballNormalizer::with_stop_words(["this", "is", "a", "about", "for"])
    }

    #[test]
    fn tokenize_stems_and_dedups() {
        let tokens = normalizer().tokenize("this is a test about testing functions. Test again");
        let pairs: Vec<(&str, &str)> = tokens
            .iter()
            .map(|t| (t.text.as_str(), t.stem.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("test", "test"),
                ("testing", "test"),
                ("functions", "function"),
                ("again", "again"),
            ]
        );
    }

    #[test]
    fn tokenize_drops_short_words_and_numbers() {
        let tokens = normalizer().tokenize("Go to 2024 now");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["now"]);
    }

    #[test]
    fn sentences_carry_stem_stream() {
        let units = normalizer().sentences(
            "this is a test about testing functions. This is a second sentence about functionality",
        );
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].text, "this is a test about testing functions.");
        assert_eq!(units[0].token, "test test function");
        assert!(units[1].contains_stem("function"));
        assert!(!units[1].contains_stem("test"));
    }

    #[test]
    fn sentences_without_content_words_are_dropped() {
        let units = normalizer().sentences("This is a. Real content here.");
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].text, "Real content here.");
    }

    #[test]
    fn word_forms_lowercase_and_split_punctuation() {
        let forms = normalizer().word_forms("\"Testing,\"");
        assert_eq!(forms, vec!["testing"]);
        assert_eq!(normalizer().word_forms("well-known"), vec!["well", "known"]);
        assert!(normalizer().word_forms("42").is_empty());
    }

    #[test]
    fn default_uses_english_stop_words() {
        let tokens = SnowballNormalizer::default().tokenize("the and with");
        assert!(tokens.is_empty());
    }
}
