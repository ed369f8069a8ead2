//! `nex crawl` command implementation.

use std::path::PathBuf;

use clap::Args;
use nex_config::{CliSettings, Config};
use nex_export::CachedFetcher;

use crate::error::CliError;
use crate::output::Output;

use super::{build_client, crawl_root, open_cache, resolve_root};

/// Arguments for the crawl command.
#[derive(Args)]
pub(crate) struct CrawlArgs {
    /// Root page or database id (default: export.root from nex.toml).
    root: Option<String>,

    /// Path to configuration file (default: auto-discover nex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API integration token (overrides config).
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Entity cache directory (overrides config).
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Enable verbose output (show crawl logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CrawlArgs {
    /// Execute the crawl command.
    ///
    /// # Errors
    ///
    /// Configuration and source failures. Missing entities inside the
    /// tree are skipped, not fatal.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            token: self.token,
            cache_dir: self.cache_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let root = resolve_root(self.root.as_deref(), &config)?;
        let client = build_client(&config)?;
        let cache = open_cache(&config);
        let fetcher = CachedFetcher::new(Box::new(client), cache.as_ref());

        output.info(&format!("Crawling from {root}"));
        let manifest = crawl_root(&fetcher, &root)?;
        if manifest.pages.is_empty() && manifest.databases.is_empty() {
            return Err(CliError::Export(format!("root entity not found: {root}")));
        }

        output.success(&format!(
            "Cached {} page(s), {} database(s) in {}",
            manifest.pages.len(),
            manifest.databases.len(),
            config.export_resolved.cache_dir.display()
        ));
        Ok(())
    }
}
