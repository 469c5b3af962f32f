// Keyword extraction: ranking backends and stem derivation.

pub mod stems;
pub mod tfidf;
pub mod traits;
