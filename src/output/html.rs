// HTML report rendering.
//
// Produces compact markup; `pretty::prettify` lays it out for reading.
// Rendering is a pure function of its inputs, so identical entries always
// give byte-identical output.

use super::escape_html;
use crate::index::entry::ReportEntry;
use crate::text::traits::TextNormalizer;

/// Stylesheet linked from the report head when none is configured.
pub const DEFAULT_STYLESHEET: &str = "styling.css";

/// Wrap a sentence in a paragraph, highlighting words whose forms appear in
/// `surface_forms`. Words are split on single spaces and rejoined the same
/// way, so the original spacing survives.
pub fn highlight(
    sentence: &str,
    surface_forms: &[String],
    normalizer: &dyn TextNormalizer,
) -> String {
    let words: Vec<String> = sentence
        .split(' ')
        .map(|word| {
            let hit = normalizer
                .word_forms(word)
                .iter()
                .any(|form| surface_forms.contains(form));
            if hit {
                format!(r#"<span class="highlight">{}</span>"#, escape_html(word))
            } else {
                escape_html(word)
            }
        })
        .collect();

    format!(r#"<p class="sentence">{}</p>"#, words.join(" "))
}

fn render_row(entry: &ReportEntry, normalizer: &dyn TextNormalizer) -> String {
    let words = escape_html(&entry.words.join(", "));

    let doc_items: String = entry
        .documents
        .iter()
        .map(|doc| format!("<li>{}</li>", escape_html(doc)))
        .collect();

    // BTreeMap iteration is already sorted by document id
    let sentence_blocks: String = entry
        .sentences
        .iter()
        .map(|(doc, sentences)| {
            let paragraphs: String = sentences
                .iter()
                .map(|s| highlight(s, &entry.words, normalizer))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<h3>{}</h3>\n{}", escape_html(doc), paragraphs)
        })
        .collect();

    format!(
        "<tr>\
         <td><span class=\"highlight\">{stem}</span> ({words})</td>\
         <td>{count}</td>\
         <td><ul class=\"doclist\">{doc_items}</ul></td>\
         <td>{sentence_blocks}</td>\
         </tr>\n",
        stem = escape_html(&entry.stem),
        count = entry.sentence_count,
    )
}

/// Render the full report document.
///
/// `entries` are emitted in the order given; callers sort them first.
/// `document_ids` lists every scanned document and is sorted here.
pub fn render(
    entries: &[ReportEntry],
    document_ids: &[String],
    normalizer: &dyn TextNormalizer,
    stylesheet: &str,
) -> String {
    let mut ids: Vec<&String> = document_ids.iter().collect();
    ids.sort();

    let mut html = String::new();
    html.push_str(&format!(
        "<html><head><link href=\"{}\" rel=\"stylesheet\"></head>\n<body>\n",
        escape_html(stylesheet)
    ));
    html.push_str("<h1>Keyword extraction</h1>\n<h2>Documents scanned:</h2>\n<ol>");
    for id in ids {
        let id = escape_html(id);
        html.push_str(&format!("<li><a href=\"{id}\">{id}</a></li>"));
    }
    html.push_str("</ol>\n<h2>Keyword list</h2>\n");
    html.push_str(
        "<table class=\"data-table\"><tbody>\n\
         <tr><th>Word stem (Words)</th><th>Total sentence occurrences</th>\
         <th>Documents</th><th>Sentences containing the words</th></tr>\n",
    );
    for entry in entries {
        html.push_str(&render_row(entry, normalizer));
    }
    html.push_str("</tbody></table>\n</body></html>\n");
    html
}
