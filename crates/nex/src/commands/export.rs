//! `nex export` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use nex_config::{CliSettings, Config};
use nex_export::CachedFetcher;
use nex_render::HtmlRenderer;
use rayon::prelude::*;

use crate::error::CliError;
use crate::output::Output;

use super::{build_client, crawl_root, open_cache, resolve_root};

/// Stylesheet shipped next to every rendered document.
const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Root page or database id (default: export.root from nex.toml).
    root: Option<String>,

    /// Path to configuration file (default: auto-discover nex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API integration token (overrides config).
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Directory to write rendered documents to (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Entity cache directory (overrides config).
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Enable caching (default: enabled).
    #[arg(long)]
    cache: Option<bool>,

    /// Disable caching.
    #[arg(long, conflicts_with = "cache")]
    no_cache: bool,

    /// Enable verbose output (show crawl and render logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Configuration, crawl, and I/O failures; also when any document
    /// fails to render (sibling documents still complete first).
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cache_enabled = self.no_cache.then_some(false).or(self.cache);
        let cli_settings = CliSettings {
            token: self.token,
            root: None,
            output_dir: self.output_dir,
            cache_dir: self.cache_dir,
            cache_enabled,
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
        output.info(&format!(
            "Crawled {} page(s), {} database(s)",
            manifest.pages.len(),
            manifest.databases.len()
        ));

        let output_dir = &config.export_resolved.output_dir;
        std::fs::create_dir_all(output_dir)?;
        std::fs::write(output_dir.join("styles.css"), STYLESHEET)?;

        // Documents are independent; render them in parallel and report
        // every failure instead of stopping at the first.
        let renderer = HtmlRenderer::new(&fetcher);
        let failures: Vec<(String, String)> = manifest
            .pages
            .par_iter()
            .map(|id| (id, renderer.render_page(id)))
            .chain(
                manifest
                    .databases
                    .par_iter()
                    .map(|id| (id, renderer.render_database(id))),
            )
            .filter_map(|(id, result)| {
                let rendered = match result {
                    Ok(rendered) => rendered,
                    Err(err) => return Some((id.clone(), err.to_string())),
                };
                match write_document(output_dir, id, &rendered) {
                    Ok(()) => None,
                    Err(err) => Some((id.clone(), err.to_string())),
                }
            })
            .collect();

        let total = manifest.pages.len() + manifest.databases.len();
        if failures.is_empty() {
            output.success(&format!(
                "Rendered {total} document(s) to {}",
                output_dir.display()
            ));
            Ok(())
        } else {
            for (id, reason) in &failures {
                output.warning(&format!("Failed to render {id}: {reason}"));
            }
            Err(CliError::Export(format!(
                "{} of {total} document(s) failed to render",
                failures.len()
            )))
        }
    }
}

/// Write one document with the shared head and stylesheet link.
fn write_document(output_dir: &Path, id: &str, body: &str) -> Result<(), std::io::Error> {
    let html = format!(
        "<head><meta charset=\"UTF-8\"><link rel=\"stylesheet\" href=\"styles.css\"></head>{body}"
    );
    std::fs::write(output_dir.join(format!("{id}.html")), html)
}
