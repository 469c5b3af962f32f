use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use keyword_report::config::{Config, Overrides};
use keyword_report::keywords::tfidf::TfIdfRanker;
use keyword_report::output::terminal::display_summary;
use keyword_report::pipeline::report::generate;
use keyword_report::text::snowball::SnowballNormalizer;

/// Keyword report: find the key word stems in a folder of text documents.
///
/// Ranks keywords per document, reduces them to stems, collects every
/// sentence mentioning each stem, and writes an HTML report with the
/// keywords highlighted.
#[derive(Parser)]
#[command(name = "keyword-report", version, about)]
struct Cli {
    /// Folder to scan for documents (default: data)
    #[arg(long)]
    folder: Option<String>,

    /// File-name pattern to match inside the folder (default: *.txt)
    #[arg(long)]
    pattern: Option<String>,

    /// Report file to write, overwritten if present (default: summary.html)
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Ranked keywords to take from each document (default: 10)
    #[arg(long)]
    keywords: Option<usize>,

    /// Stylesheet linked from the report (default: styling.css)
    #[arg(long)]
    stylesheet: Option<String>,

    /// Stems to list in the terminal summary
    #[arg(long, default_value = "15")]
    top: usize,
}

impl Cli {
    /// The flags that were given explicitly, ready to overlay on the config.
    fn overrides(&self) -> Overrides {
        Overrides {
            folder: self.folder.clone(),
            pattern: self.pattern.clone(),
            output: self.output.clone(),
            keyword_count: self.keywords,
            stylesheet: self.stylesheet.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keyword_report=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.apply(cli.overrides());
    config.validate()?;

    info!(keyword_count = config.keyword_count, "Starting keyword report");
    println!(
        "Scanning {} for {}...",
        config.folder.bold(),
        config.pattern.bold()
    );

    let ranker = TfIdfRanker::default();
    let normalizer = SnowballNormalizer::default();

    let summary = generate(&config, &ranker, &normalizer)
        .with_context(|| format!("Failed to build report from {}", config.folder))?;

    display_summary(&summary.entries, summary.document_count, cli.top);

    println!(
        "\n{}",
        format!("Report saved to: {}", summary.output.display()).bold()
    );

    Ok(())
}
