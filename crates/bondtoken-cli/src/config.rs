//! CLI configuration file.
//!
//! Every field has a default, so an empty or partial file is valid.
//! Command-line flags override whatever the file sets.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bondtoken_catalog::SortKey;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bondtoken.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Bond catalog file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Transaction history file
    #[serde(default)]
    pub transactions_path: Option<PathBuf>,

    /// Sort key used when `search` is run without `--sort`
    #[serde(default)]
    pub default_sort: SortKey,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Log filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("bonds.csv")
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            transactions_path: None,
            default_sort: SortKey::default(),
            default_format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::from_file(fallback);
        }
        Ok(Self::default())
    }
}
