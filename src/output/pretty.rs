// HTML pretty-printing.
//
// Every tag and every non-blank text run goes on its own line, indented two
// spaces per open element. Text runs are trimmed with inner whitespace
// collapsed, which HTML renders identically.

use std::sync::LazyLock;

use regex_lite::Regex;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>|[^<]+").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const INDENT: &str = "  ";

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: [&str; 9] = [
    "area", "base", "br", "col", "hr", "img", "input", "link", "meta",
];

enum Piece<'a> {
    Open(&'a str),
    Close(&'a str),
    Leaf(&'a str),
    Text(String),
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches(|c: char| c == '<' || c == '/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn classify(raw: &str) -> Option<Piece<'_>> {
    if !raw.starts_with('<') {
        let text = WHITESPACE.replace_all(raw.trim(), " ").into_owned();
        return (!text.is_empty()).then_some(Piece::Text(text));
    }

    if raw.starts_with("</") {
        return Some(Piece::Close(raw));
    }
    if raw.starts_with("<!") || raw.starts_with("<?") || raw.ends_with("/>") {
        return Some(Piece::Leaf(raw));
    }

    let name = tag_name(raw);
    if VOID_ELEMENTS.contains(&name.as_str()) {
        Some(Piece::Leaf(raw))
    } else {
        Some(Piece::Open(raw))
    }
}

/// Reformat `html` with one node per line.
pub fn prettify(html: &str) -> String {
    let mut out = String::with_capacity(html.len() * 2);
    let mut depth: usize = 0;

    let mut line = |depth: usize, content: &str| {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(content);
        out.push('\n');
    };

    for piece in MARKUP.find_iter(html).filter_map(|m| classify(m.as_str())) {
        match piece {
            Piece::Open(tag) => {
                line(depth, tag);
                depth += 1;
            }
            Piece::Close(tag) => {
                depth = depth.saturating_sub(1);
                line(depth, tag);
            }
            Piece::Leaf(tag) => line(depth, tag),
            Piece::Text(text) => line(depth, &text),
        }
    }

    out
}
