//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{InsightsArgs, SearchArgs, ShowArgs, TokenPriceArgs, TransactionsArgs};

/// Bondtoken - Search and inspect a tokenized bond catalog
#[derive(Parser)]
#[command(name = "bondtoken")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Bond catalog file (.csv or .json)
    #[arg(long, global = true, env = "BONDTOKEN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Transaction history file (.csv or .json)
    #[arg(long, global = true)]
    pub transactions: Option<PathBuf>,

    /// Configuration file (default: ./bondtoken.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog by text and category, ranked by a sort key
    Search(SearchArgs),

    /// Show one bond with its maturity metrics and transactions
    Show(ShowArgs),

    /// Market insights over the whole catalog
    Insights(InsightsArgs),

    /// List ledger transactions, newest first
    Transactions(TransactionsArgs),

    /// Compute the face value carried by one token of a new issue
    TokenPrice(TokenPriceArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
