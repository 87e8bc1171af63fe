//! Bondtoken CLI - Command-line interface for a tokenized bond catalog.
//!
//! # Usage
//!
//! ```bash
//! # Search corporate bonds, soonest maturity first
//! bondtoken --catalog bonds.csv search --category corporate --sort maturity
//!
//! # One bond with its transaction history
//! bondtoken --catalog bonds.csv --transactions txns.json show 1
//!
//! # Market averages as JSON
//! bondtoken --catalog bonds.csv --format json insights
//!
//! # Token price for a new issue
//! bondtoken token-price --par 1000000 --supply 1000
//! ```
//!
//! Settings come from `--config` (or `./bondtoken.toml`), overridden by flags.
//! Logs go to stderr, filtered by `RUST_LOG` or the config's `log_filter`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&config.log_filter);

    let ctx = Context::resolve(&cli, config);
    tracing::debug!(catalog = %ctx.catalog_path.display(), format = ?ctx.format, "resolved settings");

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &ctx)?,
        Commands::Show(args) => commands::show::execute(args, &ctx)?,
        Commands::Insights(args) => commands::insights::execute(args, &ctx)?,
        Commands::Transactions(args) => commands::transactions::execute(args, &ctx)?,
        Commands::TokenPrice(args) => commands::token_price::execute(args, &ctx)?,
    }

    Ok(())
}
