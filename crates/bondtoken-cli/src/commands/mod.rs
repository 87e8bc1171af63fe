//! CLI command implementations.

pub mod insights;
pub mod search;
pub mod show;
pub mod token_price;
pub mod transactions;

// Re-export submodules for convenience
pub use insights::InsightsArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use token_price::TokenPriceArgs;
pub use transactions::TransactionsArgs;

use std::path::PathBuf;

use bondtoken_catalog::{load_catalog, load_transactions, BondCatalog, SortKey};
use bondtoken_core::{Date, Transaction};

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Settings resolved from flags and the configuration file.
#[derive(Debug, Clone)]
pub struct Context {
    /// Bond catalog file.
    pub catalog_path: PathBuf,
    /// Transaction history file, if any.
    pub transactions_path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Sort key when none is given.
    pub default_sort: SortKey,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl Context {
    /// Merges command-line flags over the configuration file.
    pub fn resolve(cli: &Cli, config: CliConfig) -> Self {
        Self {
            catalog_path: cli.catalog.clone().unwrap_or(config.catalog_path),
            transactions_path: cli.transactions.clone().or(config.transactions_path),
            format: cli.format.unwrap_or(config.default_format),
            default_sort: config.default_sort,
            quiet: cli.quiet,
        }
    }

    /// True when informational lines may be printed around a table.
    pub fn notes_enabled(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }

    /// Loads the bond catalog.
    pub fn catalog(&self) -> CliResult<BondCatalog> {
        Ok(load_catalog(&self.catalog_path)?)
    }

    /// Loads the transaction history, failing if no file is configured.
    pub fn transactions(&self) -> CliResult<Vec<Transaction>> {
        let path = self.transactions_path.as_ref().ok_or_else(|| {
            CliError::MissingArgument("--transactions (or transactions_path in the config file)".into())
        })?;
        Ok(load_transactions(path)?)
    }

    /// Loads the transaction history if a file is configured.
    pub fn transactions_if_configured(&self) -> CliResult<Vec<Transaction>> {
        match self.transactions_path {
            Some(_) => self.transactions(),
            None => Ok(Vec::new()),
        }
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses an optional reference date, defaulting to today.
pub fn reference_date(as_of: Option<&str>) -> CliResult<Date> {
    as_of.map_or_else(|| Ok(Date::today()), parse_date)
}
