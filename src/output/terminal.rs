// Colored terminal output for the keyword summary.
//
// The HTML file is the real report; this is the quick look printed after a
// run so the operator can sanity-check the top stems.

use colored::Colorize;

use crate::index::entry::ReportEntry;

/// Display the top `limit` entries as a ranked table.
pub fn display_summary(entries: &[ReportEntry], document_count: usize, limit: usize) {
    if entries.is_empty() {
        println!("No keyword stems found in {document_count} documents.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Keyword Stems ({} stems across {} documents) ===",
            entries.len(),
            document_count
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<20} {:>9}  {:>4}  {}",
        "Rank".dimmed(),
        "Stem".dimmed(),
        "Sentences".dimmed(),
        "Docs".dimmed(),
        "Words".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, entry) in entries.iter().take(limit).enumerate() {
        println!("{}", summary_row(i + 1, entry));
    }

    let hidden = entries.len().saturating_sub(limit);
    if hidden > 0 {
        println!("  {}", format!("... and {hidden} more in the report").dimmed());
    }

    let unmatched = entries.iter().filter(|e| e.sentence_count == 0).count();
    if unmatched > 0 {
        println!(
            "  {} {} stems matched no sentence",
            "~".yellow(),
            unmatched
        );
    }
}

/// One ranked table line. Unmatched stems get a dimmed count.
fn summary_row(rank: usize, entry: &ReportEntry) -> String {
    let count = format!("{:>9}", entry.sentence_count);
    let count = if entry.sentence_count == 0 {
        count.dimmed()
    } else {
        count.bright_green()
    };

    let words = super::truncate_chars(&entry.words.join(", "), 40);
    format!(
        "  {:>4}. {:<20} {}  {:>4}  {}",
        rank,
        entry.stem.bold(),
        count,
        entry.documents.len(),
        words.dimmed(),
    )
}
