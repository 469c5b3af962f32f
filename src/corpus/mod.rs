// Document corpus: the loaded text files keyed by path.

pub mod loader;

use std::collections::BTreeMap;

/// Document identifier (file path) to raw text. Read-only once loaded.
pub type Corpus = BTreeMap<String, String>;
