// Unit tests for report rendering and pretty-printing.

use std::collections::BTreeMap;

use keyword_report::index::entry::ReportEntry;
use keyword_report::output::html::{highlight, render};
use keyword_report::pipeline::report::render_report;
use keyword_report::text::snowball::SnowballNormalizer;

fn normalizer() -> SnowballNormalizer {
    SnowballNormalizer::with_stop_words(["this", "is", "a", "about"])
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn test_entry() -> ReportEntry {
    ReportEntry {
        stem: "test".to_string(),
        words: strings(&["test"]),
        sentence_count: 1,
        sentences: BTreeMap::from([(
            "doc".to_string(),
            strings(&["this is a test about testing functions."]),
        )]),
        documents: strings(&["doc"]),
    }
}

#[test]
fn highlight_exact_markup() {
    let html = highlight(
        "This is a sentence for testing",
        &strings(&["sentence", "testing"]),
        &normalizer(),
    );
    assert_eq!(
        html,
        r#"<p class="sentence">This is a <span class="highlight">sentence</span> for <span class="highlight">testing</span></p>"#
    );
}

#[test]
fn highlight_without_matches_only_wraps() {
    let html = highlight("Nothing to see", &strings(&["zebra"]), &normalizer());
    assert_eq!(html, r#"<p class="sentence">Nothing to see</p>"#);
}

#[test]
fn full_report_layout() {
    let html = render_report(&[test_entry()], &strings(&["doc"]), &normalizer(), "styling.css");

    let expected = r#"<html>
  <head>
    <link href="styling.css" rel="stylesheet">
  </head>
  <body>
    <h1>
      Keyword extraction
    </h1>
    <h2>
      Documents scanned:
    </h2>
    <ol>
      <li>
        <a href="doc">
          doc
        </a>
      </li>
    </ol>
    <h2>
      Keyword list
    </h2>
    <table class="data-table">
      <tbody>
        <tr>
          <th>
            Word stem (Words)
          </th>
          <th>
            Total sentence occurrences
          </th>
          <th>
            Documents
          </th>
          <th>
            Sentences containing the words
          </th>
        </tr>
        <tr>
          <td>
            <span class="highlight">
              test
            </span>
            (test)
          </td>
          <td>
            1
          </td>
          <td>
            <ul class="doclist">
              <li>
                doc
              </li>
            </ul>
          </td>
          <td>
            <h3>
              doc
            </h3>
            <p class="sentence">
              this is a
              <span class="highlight">
                test
              </span>
              about testing functions.
            </p>
          </td>
        </tr>
      </tbody>
    </table>
  </body>
</html>
"#;
    assert_eq!(html, expected);
}

#[test]
fn documents_list_is_sorted() {
    let html = render(&[], &strings(&["b.txt", "a.txt", "c.txt"]), &normalizer(), "s.css");
    let a = html.find("a.txt").unwrap();
    let b = html.find("b.txt").unwrap();
    let c = html.find("c.txt").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn sentences_grouped_by_sorted_document() {
    let entry = ReportEntry {
        stem: "cat".to_string(),
        words: strings(&["cats"]),
        sentence_count: 2,
        sentences: BTreeMap::from([
            ("z.txt".to_string(), strings(&["Cats nap."])),
            ("m.txt".to_string(), strings(&["Cats hunt."])),
        ]),
        documents: strings(&["m.txt", "z.txt"]),
    };
    let html = render(&[entry], &strings(&["m.txt", "z.txt"]), &normalizer(), "s.css");

    let m = html.find("<h3>m.txt</h3>").unwrap();
    let z = html.find("<h3>z.txt</h3>").unwrap();
    assert!(m < z);
    assert!(html.contains(r#"<span class="highlight">Cats</span> hunt."#));
    assert!(html.contains("(cats)"));
}

#[test]
fn rendering_is_idempotent() {
    let entries = vec![test_entry()];
    let docs = strings(&["doc", "other"]);
    let first = render_report(&entries, &docs, &normalizer(), "styling.css");
    let second = render_report(&entries, &docs, &normalizer(), "styling.css");
    assert_eq!(first, second);
}

#[test]
fn document_ids_are_escaped() {
    let html = render(&[], &strings(&["a&b.txt"]), &normalizer(), "styling.css");
    assert!(html.contains(r#"<a href="a&amp;b.txt">a&amp;b.txt</a>"#));
}
