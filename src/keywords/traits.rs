// Keyword ranker trait: the swap-ready ranking abstraction.
//
// Ranking decides which words matter in a document. Everything downstream
// only sees the ranked phrases, so a TextRank or embeddings backend can be
// dropped in without touching the extractor.

use crate::error::Result;

pub trait KeywordRanker {
    /// Up to `count` keyword phrases for `text`, best first. Phrases may
    /// contain several space-separated words.
    fn rank(&self, text: &str, count: usize) -> Result<Vec<String>>;
}
