use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::cli::CliConfig;
use super::constants::{CONFIG_FILE_NAME, DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT};

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Pagination configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PaginationFileConfig {
    pub default_limit: Option<u32>,
    pub max_limit: Option<u32>,
}

/// Root of the JSON config file
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    pub pagination: Option<PaginationFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }
}

// =============================================================================
// Resolved Config
// =============================================================================

/// Page-size policy applied to list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_QUERY_LIMIT,
            max_limit: MAX_QUERY_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Cap a requested page size at `max_limit`
    pub fn clamp(&self, limit: u32) -> u32 {
        limit.min(self.max_limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub pagination: PaginationConfig,
}

impl QueryConfig {
    /// Load configuration. Priority: CLI/env > config file > defaults.
    ///
    /// The config file is `--config` when given, otherwise
    /// `registry-sql.json` in the working directory if it exists.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading query configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let path = match &cli.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some(path.clone())
            }
            None => {
                let local = PathBuf::from(CONFIG_FILE_NAME);
                if local.exists() { Some(local) } else { None }
            }
        };

        let file_config = match path {
            Some(path) => {
                let config = FileConfig::load_from_file(&path)?;
                config.warn_unknown_fields();
                config
            }
            None => FileConfig::default(),
        };

        Self::from_sources(cli, &file_config)
    }

    fn from_sources(cli: &CliConfig, file: &FileConfig) -> Result<Self> {
        let defaults = PaginationConfig::default();
        let file_pagination = file.pagination.clone().unwrap_or_default();

        let max_limit = cli
            .max_limit
            .or(file_pagination.max_limit)
            .unwrap_or(defaults.max_limit);
        let default_limit = cli
            .default_limit
            .or(file_pagination.default_limit)
            .unwrap_or_else(|| defaults.default_limit.min(max_limit));

        if max_limit == 0 {
            anyhow::bail!("pagination.max_limit must be greater than 0");
        }
        if default_limit > max_limit {
            anyhow::bail!(
                "pagination.default_limit ({}) exceeds pagination.max_limit ({})",
                default_limit,
                max_limit
            );
        }

        let config = Self {
            pagination: PaginationConfig {
                default_limit,
                max_limit,
            },
        };
        tracing::debug!(default_limit, max_limit, "Resolved pagination config");
        Ok(config)
    }
}
