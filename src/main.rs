use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docdex::crawl::Crawler;
use docdex::extract::{PlainTextExtractor, TextExtractor};
use docdex::index::engine::{IndexEngine, IndexSummary};
use docdex::index::stats;
use docdex::index::types::IndexConfig;
use docdex::output;
use docdex::query::QueryEngine;
use docdex::utils::default_index_path;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docdex")]
#[command(about = "Persistent trie-based full-text index for document corpora")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl a directory, index every discovered document and snapshot
    Index {
        /// Corpus root to crawl
        #[arg(default_value = ".")]
        path: PathBuf,

        /// File extensions to register (repeatable)
        #[arg(short, long)]
        ext: Vec<String>,

        /// Snapshot file to write (defaults to the user data dir)
        #[arg(long)]
        index: Option<PathBuf>,
    },
    /// Look up a token in a snapshot
    Search {
        /// Token to look up (case-folded like indexed text)
        token: String,

        /// Snapshot file to load
        #[arg(long)]
        index: Option<PathBuf>,

        /// Print each matching document once instead of every occurrence
        #[arg(short = 'l', long)]
        documents: bool,

        /// Group occurrences under a per-document heading
        #[arg(long)]
        heading: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show snapshot statistics
    Stats {
        /// Snapshot file to load
        #[arg(long)]
        index: Option<PathBuf>,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index { path, ext, index } => run_index(path, ext, index),
        Commands::Search {
            token,
            index,
            documents,
            heading,
            no_color,
        } => run_search(token, index, documents, heading, no_color),
        Commands::Stats { index, json } => {
            let engine = load_engine(index)?;
            stats::show_stats(&engine, json)?;
            Ok(())
        }
    }
}

fn run_index(path: PathBuf, ext: Vec<String>, index: Option<PathBuf>) -> Result<()> {
    let config = if ext.is_empty() {
        IndexConfig::default()
    } else {
        IndexConfig { extensions: ext }
    };

    let crawler = Crawler::new(&config)?;
    let mut engine = IndexEngine::new();

    println!("Crawling: {}", path.display());
    let crawled = crawler.crawl(&path, &mut engine)?;
    println!("Found {} documents", crawled.registered);
    if crawled.errors > 0 {
        eprintln!("({} entries could not be read)", crawled.errors);
    }

    let summary = index_corpus(&mut engine, &PlainTextExtractor)?;
    println!(
        "Indexed {} documents ({} tokens)",
        summary.documents_indexed, summary.tokens_inserted
    );
    if summary.documents_failed > 0 {
        eprintln!("({} documents could not be extracted)", summary.documents_failed);
    }

    let snapshot = snapshot_path(index)?;
    engine
        .save(&snapshot)
        .with_context(|| format!("failed to write snapshot {}", snapshot.display()))?;
    println!("Index stored at: {}", snapshot.display());

    Ok(())
}

/// Index every registered document, skipping the ones the extractor cannot
/// handle, with a progress bar when the `progress` feature is enabled.
#[cfg(feature = "progress")]
fn index_corpus(
    engine: &mut IndexEngine,
    extractor: &dyn TextExtractor,
) -> docdex::Result<IndexSummary> {
    use indicatif::{ProgressBar, ProgressStyle};

    let bar = ProgressBar::new(engine.document_count() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );
    bar.set_message("Indexing documents...");

    let mut summary = IndexSummary::default();
    for doc_id in 0..engine.document_count() as u32 {
        match engine.index_document(doc_id, extractor) {
            Ok(tokens) => {
                summary.documents_indexed += 1;
                summary.tokens_inserted += tokens;
            }
            Err(e) => {
                tracing::warn!(doc_id, error = %e, "skipping document");
                summary.documents_failed += 1;
            }
        }
        bar.inc(1);
    }
    bar.finish_with_message("Index complete");
    Ok(summary)
}

#[cfg(not(feature = "progress"))]
fn index_corpus(
    engine: &mut IndexEngine,
    extractor: &dyn TextExtractor,
) -> docdex::Result<IndexSummary> {
    engine.index_all(extractor)
}

fn run_search(
    token: String,
    index: Option<PathBuf>,
    documents: bool,
    heading: bool,
    no_color: bool,
) -> Result<()> {
    let engine = load_engine(index)?;
    let query = QueryEngine::new(&engine);

    // Indexed text is case-folded, so fold the query the same way.
    let occurrences = query.lookup_occurrences(&token.to_lowercase());

    if documents {
        output::print_documents_only(&engine, &occurrences)?;
    } else {
        output::print_occurrences(&engine, &occurrences, !no_color, heading)?;
    }

    Ok(())
}

fn load_engine(index: Option<PathBuf>) -> Result<IndexEngine> {
    let snapshot = snapshot_path(index)?;
    IndexEngine::load(&snapshot).with_context(|| {
        format!(
            "no usable index at {}. Run 'docdex index' first",
            snapshot.display()
        )
    })
}

fn snapshot_path(index: Option<PathBuf>) -> Result<PathBuf> {
    match index {
        Some(path) => Ok(path),
        None => Ok(default_index_path()?),
    }
}
