//! Configuration management for nex.
//!
//! Parses `nex.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::expand::expand_env;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "nex.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Clone, Default)]
pub struct CliSettings {
    /// Override the API integration token.
    pub token: Option<String>,
    /// Override the root page or database id.
    pub root: Option<String>,
    /// Override the rendered output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the entity cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Override the cache enabled flag.
    pub cache_enabled: Option<bool>,
}

impl CliSettings {
    /// Check if all override fields are None (no overrides specified).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_none()
            && self.root.is_none()
            && self.output_dir.is_none()
            && self.cache_dir.is_none()
            && self.cache_enabled.is_none()
    }
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Remote service credentials (token values may reference env vars).
    notion: NotionConfigRaw,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw credentials section as parsed from TOML.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct NotionConfigRaw {
    /// Integration token, `${VAR}` references are expanded.
    token: Option<String>,
    /// Path to a file holding the token (trailing whitespace trimmed).
    token_file: Option<String>,
}

/// Raw export section as parsed from TOML (paths as strings).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    root: Option<String>,
    output_dir: Option<String>,
    cache_dir: Option<String>,
    cache_enabled: Option<bool>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Root page or database id to export from.
    pub root: Option<String>,
    /// Directory rendered documents are written to.
    pub output_dir: PathBuf,
    /// Directory the entity cache lives in.
    pub cache_dir: PathBuf,
    /// Whether the persistent cache is used.
    pub cache_enabled: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field}: {message}")]
    EnvVar { field: String, message: String },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `nex.toml` in the current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Resolve the API token.
    ///
    /// Order: CLI/override token (applied through [`CliSettings`]), the
    /// `notion.token` value with env expansion, then `notion.token_file`
    /// contents.
    ///
    /// # Errors
    ///
    /// Env expansion failures and unreadable token files.
    pub fn token(&self) -> Result<Option<String>, ConfigError> {
        if let Some(token) = &self.notion.token {
            return Ok(Some(expand_env(token, "notion.token")?));
        }
        if let Some(path) = &self.notion.token_file {
            let path = expand_env(path, "notion.token_file")?;
            let contents = std::fs::read_to_string(&path)?;
            return Ok(Some(contents.trim().to_owned()));
        }
        Ok(None)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(token) = &settings.token {
            self.notion.token = Some(token.clone());
            self.notion.token_file = None;
        }
        if let Some(root) = &settings.root {
            self.export_resolved.root = Some(root.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.export_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(cache_dir) = &settings.cache_dir {
            self.export_resolved.cache_dir.clone_from(cache_dir);
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.export_resolved.cache_enabled = cache_enabled;
        }
    }

    /// Search for config file in current directory and parents.
    #[must_use]
    pub fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    #[must_use]
    pub fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self {
            notion: NotionConfigRaw::default(),
            export: ExportConfigRaw::default(),
            export_resolved: ExportConfig {
                root: None,
                output_dir: base.join("rendered"),
                cache_dir: base.join(".nex/cache"),
                cache_enabled: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.export_resolved = ExportConfig {
            root: self.export.root.clone(),
            output_dir: resolve(self.export.output_dir.as_deref(), "rendered"),
            cache_dir: resolve(self.export.cache_dir.as_deref(), ".nex/cache"),
            cache_enabled: self.export.cache_enabled.unwrap_or(true),
        };
    }
}
