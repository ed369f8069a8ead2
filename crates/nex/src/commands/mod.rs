//! CLI command implementations.

pub(crate) mod crawl;
pub(crate) mod export;

pub(crate) use crawl::CrawlArgs;
pub(crate) use export::ExportArgs;

use nex_cache::{Cache, FileCache, NullCache};
use nex_config::Config;
use nex_export::{CachedFetcher, Crawler, Seen};
use nex_notion::{NotionClient, normalize_id};

use crate::error::CliError;

/// Cache format version. Bump when entity blob shapes change; a mismatch
/// wipes the cache directory on open.
const CACHE_VERSION: &str = "1";

/// Ids collected during a crawl, one entry per rendered document.
pub(crate) struct Manifest {
    pub(crate) pages: Vec<String>,
    pub(crate) databases: Vec<String>,
}

/// Open the configured cache, or a no-op cache when caching is disabled.
pub(crate) fn open_cache(config: &Config) -> Box<dyn Cache> {
    if config.export_resolved.cache_enabled {
        Box::new(FileCache::new(
            config.export_resolved.cache_dir.clone(),
            CACHE_VERSION,
        ))
    } else {
        Box::new(NullCache)
    }
}

/// Resolve and canonicalize the root id from CLI argument or config.
pub(crate) fn resolve_root(arg: Option<&str>, config: &Config) -> Result<String, CliError> {
    let raw = arg
        .or(config.export_resolved.root.as_deref())
        .ok_or_else(|| {
            CliError::Validation(
                "no root id given; pass one or set export.root in nex.toml".to_owned(),
            )
        })?;
    Ok(normalize_id(raw)?)
}

/// Build the API client from the configured token.
pub(crate) fn build_client(config: &Config) -> Result<NotionClient, CliError> {
    let token = config.token()?.ok_or_else(|| {
        CliError::Validation(
            "no API token; set notion.token in nex.toml or pass --token".to_owned(),
        )
    })?;
    Ok(NotionClient::new(token))
}

/// Crawl from the root and collect the document manifest.
///
/// The root is tried as a page first; when nothing is reachable that way
/// it is retried as a database.
pub(crate) fn crawl_root(fetcher: &CachedFetcher, root: &str) -> Result<Manifest, CliError> {
    let mut pages = Vec::new();
    let mut databases = Vec::new();

    let mut crawler = Crawler::new(fetcher).with_observer(|seen| match seen {
        Seen::Page(page) => pages.push(page.id.clone()),
        Seen::Database(database) => databases.push(database.id.clone()),
    });
    crawler.crawl_page(root)?;
    drop(crawler);

    if pages.is_empty() && databases.is_empty() {
        let mut crawler = Crawler::new(fetcher).with_observer(|seen| match seen {
            Seen::Page(page) => pages.push(page.id.clone()),
            Seen::Database(database) => databases.push(database.id.clone()),
        });
        crawler.crawl_database(root)?;
        drop(crawler);
    }

    Ok(Manifest { pages, databases })
}
