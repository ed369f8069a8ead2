//! nex CLI - Notion export engine.
//!
//! Provides commands for:
//! - `export`: Crawl a content tree and render it to static HTML
//! - `crawl`: Crawl only, filling the entity cache

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CrawlArgs, ExportArgs};
use output::Output;

/// nex - Notion export engine.
#[derive(Parser)]
#[command(name = "nex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl a content tree and render it to static HTML.
    Export(ExportArgs),
    /// Crawl a content tree into the entity cache without rendering.
    Crawl(CrawlArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Export(args) => args.verbose,
        Commands::Crawl(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Export(args) => args.execute(),
        Commands::Crawl(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
