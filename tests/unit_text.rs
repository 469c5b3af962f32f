// Unit tests for the document loader and text normalizer.

use std::fs;

use keyword_report::corpus::loader::{load_folder, read_file};
use keyword_report::error::ReportError;
use keyword_report::text::snowball::SnowballNormalizer;
use keyword_report::text::traits::TextNormalizer;

// ============================================================
// Loader
// ============================================================

#[test]
fn empty_arguments_fail_fast() {
    assert!(matches!(read_file(""), Err(ReportError::InvalidInput(_))));
    assert!(matches!(
        load_folder("", "*.txt"),
        Err(ReportError::InvalidInput(_))
    ));
}

#[test]
fn folder_keys_and_values_match_files() {
    let dir = tempfile::tempdir().unwrap();
    let files = [("one.txt", "First file."), ("two.txt", "Second file.")];
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    fs::write(dir.path().join("skip.csv"), "a,b").unwrap();

    let corpus = load_folder(dir.path().to_str().unwrap(), "*.txt").unwrap();

    let expected: Vec<String> = files
        .iter()
        .map(|(name, _)| dir.path().join(name).display().to_string())
        .collect();
    let keys: Vec<&String> = corpus.keys().collect();
    assert_eq!(keys, expected.iter().collect::<Vec<_>>());

    for (name, body) in files {
        let key = dir.path().join(name).display().to_string();
        assert_eq!(corpus[&key], body);
        assert_eq!(read_file(&key).unwrap(), body);
    }
}

#[test]
fn custom_pattern_selects_other_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "markdown").unwrap();
    fs::write(dir.path().join("b.txt"), "text").unwrap();

    let corpus = load_folder(dir.path().to_str().unwrap(), "*.md").unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.values().next().unwrap(), "markdown");
}

// ============================================================
// Normalizer
// ============================================================

#[test]
fn surface_forms_share_a_stem() {
    let normalizer = SnowballNormalizer::with_stop_words(Vec::<String>::new());
    let tokens = normalizer.tokenize("connect connected connecting connection");
    let stems: Vec<&str> = tokens.iter().map(|t| t.stem.as_str()).collect();
    assert_eq!(stems, vec!["connect"; 4]);
}

#[test]
fn tokens_are_lowercased_surface_text() {
    let normalizer = SnowballNormalizer::with_stop_words(Vec::<String>::new());
    let tokens = normalizer.tokenize("Testing TESTING testing");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "testing");
    assert_eq!(tokens[0].stem, "test");
}

#[test]
fn sentence_units_keep_display_text() {
    let normalizer = SnowballNormalizer::with_stop_words(["the"]);
    let units = normalizer.sentences("The Runner runs!  Nobody watched?\nDone");
    let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(texts, vec!["The Runner runs!", "Nobody watched?", "Done"]);
    assert_eq!(units[0].token, "runner run");
}
