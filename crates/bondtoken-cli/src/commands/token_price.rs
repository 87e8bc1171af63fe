//! Token price command implementation.
//!
//! Splits the face value of a new issue across its token supply.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use bondtoken_core::issuance::token_price;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_amount, print_json, print_output, KeyValue};

/// Arguments for the token-price command.
#[derive(Args, Debug)]
pub struct TokenPriceArgs {
    /// Face value of the whole issue
    #[arg(short, long)]
    pub par: Decimal,

    /// Number of tokens the issue is split into
    #[arg(short, long)]
    pub supply: u64,
}

#[derive(Debug, Serialize)]
struct TokenPrice {
    par_value: Decimal,
    token_supply: u64,
    token_price: Decimal,
}

/// Execute the token-price command.
pub fn execute(args: TokenPriceArgs, ctx: &Context) -> Result<()> {
    let price = token_price(args.par, args.supply)?;

    match ctx.format {
        OutputFormat::Json => print_json(&TokenPrice {
            par_value: args.par,
            token_supply: args.supply,
            token_price: price,
        }),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Par Value", format_amount(&args.par)),
                KeyValue::new("Token Supply", args.supply.to_string()),
                KeyValue::new("Token Price", format_amount(&price)),
            ];
            print_output(&rows, ctx.format)
        }
    }
}
