use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use segue_core::limits::{DEFAULT_DIVERSE_LIMIT, DEFAULT_RECOMMEND_LIMIT, DEFAULT_SIMILAR_LIMIT};

/// Configuration for segue.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SEGUE_* prefix)
/// 3. Config file (~/.config/segue/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the track table (CSV).
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/meta.csv
    /// - ENV: SEGUE_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/meta.csv"
    /// - Default: ~/.local/share/segue/catalog.csv
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Path to the embedding matrix (`.npy`), row-aligned with the catalog.
    ///
    /// Can be set via:
    /// - CLI: --embeddings /path/to/embeddings.npy
    /// - ENV: SEGUE_EMBEDDINGS_PATH
    /// - Config: embeddings_path = "/path/to/embeddings.npy"
    /// - Default: ~/.local/share/segue/embeddings.npy
    #[serde(default = "default_embeddings_path")]
    pub embeddings_path: PathBuf,

    /// Number of recommendations returned for a text query.
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,

    /// Number of entries in a raw similarity listing.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,

    /// Number of diverse recommendations.
    #[serde(default = "default_diverse_limit")]
    pub diverse_limit: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_coloured")]
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            coloured: default_coloured(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            embeddings_path: default_embeddings_path(),
            recommend_limit: DEFAULT_RECOMMEND_LIMIT,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
            diverse_limit: DEFAULT_DIVERSE_LIMIT,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/segue/config.toml
    /// Reads environment variables with SEGUE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("segue");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Override the data paths, e.g. from `--catalog` / `--embeddings`.
    #[must_use]
    pub fn with_paths(mut self, catalog: Option<PathBuf>, embeddings: Option<PathBuf>) -> Self {
        if let Some(path) = catalog {
            self.catalog_path = path;
        }
        if let Some(path) = embeddings {
            self.embeddings_path = path;
        }
        self
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("segue")
}

/// Default track table: ~/.local/share/segue/catalog.csv (or platform equivalent)
fn default_catalog_path() -> PathBuf {
    data_dir().join("catalog.csv")
}

/// Default embeddings: ~/.local/share/segue/embeddings.npy (or platform equivalent)
fn default_embeddings_path() -> PathBuf {
    data_dir().join("embeddings.npy")
}

fn default_recommend_limit() -> usize {
    DEFAULT_RECOMMEND_LIMIT
}

fn default_similar_limit() -> usize {
    DEFAULT_SIMILAR_LIMIT
}

fn default_diverse_limit() -> usize {
    DEFAULT_DIVERSE_LIMIT
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_coloured() -> bool {
    true
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/segue/config.toml
/// - macOS: ~/Library/Application Support/segue/config.toml
/// - Windows: %APPDATA%\segue\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("segue")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Segue Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SEGUE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Track table: CSV with track_id, track, artist, album, pos_count columns
#
# Can also be set via:
# - CLI: segue --catalog /path/to/meta.csv recommend "Yesterday"
# - Environment: SEGUE_CATALOG_PATH=/path/to/meta.csv
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/meta.csv"

# Embedding matrix: 2-D .npy array, one row per track in catalog order
#
# Can also be set via:
# - CLI: segue --embeddings /path/to/embeddings.npy recommend "Yesterday"
# - Environment: SEGUE_EMBEDDINGS_PATH=/path/to/embeddings.npy
#
# Default: Platform-specific data directory
#embeddings_path = "/path/to/embeddings.npy"

# Result list lengths
recommend_limit = 10
similar_limit = 20
diverse_limit = 10

[logging]
# trace, debug, info, warn, error
level = "info"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
