// Sentence segmentation.
//
// A sentence ends at `.`, `!` or `?` followed by whitespace or the end of the
// line, or at a line break. Sentences never span lines, except where a title
// or acronym abbreviation is shielded below.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Stands in for the whitespace after an abbreviation while splitting.
const SHIELD: char = '\u{E000}';

/// Short capitalised titles: "Dr. Smith", "Mrs. Jones".
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]{1,2}\.)\s(\w)").expect("valid regex"));

/// Dotted acronyms: "U.S. Army", "e.g. this".
static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.[a-zA-Z]\.)\s(\w)").expect("valid regex"));

/// Split `text` into trimmed, non-empty sentence strings in document order.
///
/// The whitespace after a title or acronym does not end a sentence; it comes
/// back as a single space.
pub fn split_sentences(text: &str) -> Vec<String> {
    let shielded = shield_abbreviations(text);
    shielded
        .lines()
        .flat_map(split_line)
        .map(|sentence| sentence.replace(SHIELD, " "))
        .collect()
}

fn shield_abbreviations(text: &str) -> String {
    let join = |caps: &Captures<'_>| format!("{}{SHIELD}{}", &caps[1], &caps[2]);
    let text = TITLE.replace_all(text, join);
    ACRONYM.replace_all(&text, join).into_owned()
}

fn split_line(line: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if start.is_none() {
            if c.is_whitespace() {
                continue;
            }
            start = Some(i);
        }

        let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
        if TERMINATORS.contains(&c) && at_boundary {
            if let Some(s) = start.take() {
                sentences.push(line[s..i + c.len_utf8()].to_string());
            }
        }
    }

    if let Some(s) = start {
        let rest = line[s..].trim_end();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
    }

    sentences
}
