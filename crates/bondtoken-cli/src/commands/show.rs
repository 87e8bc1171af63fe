//! Show command implementation.
//!
//! Displays one bond with its derived metrics and, when a transaction file
//! is configured, the bond's transaction history.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use bondtoken_catalog::{filter_transactions, BondView, TransactionQuery};
use bondtoken_core::{BondRecord, Transaction};

use crate::cli::OutputFormat;
use crate::commands::transactions::TransactionRow;
use crate::commands::{reference_date, Context};
use crate::output::{format_amount, format_percent, print_header, print_json, print_output, KeyValue};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Bond id
    pub id: String,

    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,
}

/// JSON shape of the show command.
#[derive(Debug, Serialize)]
struct BondDetail<'a> {
    #[serde(flatten)]
    view: BondView<'a>,
    token_price: Option<Decimal>,
    tokens_sold: u64,
    tradable: bool,
    transactions: Vec<&'a Transaction>,
}

fn detail_rows(view: &BondView<'_>) -> Vec<KeyValue> {
    let record: &BondRecord = view.record;
    let mut rows = vec![
        KeyValue::new("ID", record.id.to_string()),
        KeyValue::new("Name", record.name.clone()),
        KeyValue::new("Issuer", record.issuer.clone()),
        KeyValue::new("Category", record.category.to_string()),
        KeyValue::new("Coupon", format_percent(record.coupon_rate)),
        KeyValue::new("Current Yield", format_percent(record.current_yield)),
        KeyValue::new("Par Value", format_amount(&record.par_value)),
        KeyValue::new("Issue Date", record.issue_date.to_string()),
        KeyValue::new("Maturity Date", record.maturity_date.to_string()),
        KeyValue::new("Time to Maturity", view.time_to_maturity.long_label()),
        KeyValue::new("Maturity Progress", format!("{}%", view.progress_pct)),
        KeyValue::new(
            "Tokens",
            format!("{} of {} available", record.tokens_available, record.token_supply),
        ),
    ];
    if let Some(price) = record.token_price() {
        rows.push(KeyValue::new("Token Price", format_amount(&price)));
    }
    rows.push(KeyValue::new("Tradable", if record.is_tradable() { "yes" } else { "no" }));
    if let Some(rating) = &record.rating {
        rows.push(KeyValue::new("Rating", rating.clone()));
    }
    if let Some(description) = &record.description {
        rows.push(KeyValue::new("Description", description.clone()));
    }
    rows
}

/// Execute the show command.
pub fn execute(args: ShowArgs, ctx: &Context) -> Result<()> {
    let now = reference_date(args.as_of.as_deref())?;
    let catalog = ctx.catalog()?;
    let record = catalog.require(&args.id)?;
    let view = BondView::project(record, now)?;

    let history = ctx.transactions_if_configured()?;
    let bond_txns = filter_transactions(&history, &TransactionQuery::new().for_bond(record.id.clone()));

    match ctx.format {
        OutputFormat::Json => print_json(&BondDetail {
            token_price: record.token_price(),
            tokens_sold: record.tokens_sold(),
            tradable: record.is_tradable(),
            view,
            transactions: bond_txns,
        }),
        OutputFormat::Table | OutputFormat::Csv => {
            print_output(&detail_rows(&view), ctx.format)?;
            if ctx.transactions_path.is_some() {
                let rows: Vec<TransactionRow> = bond_txns
                    .iter()
                    .map(|t| TransactionRow::from_transaction(t, ctx.format))
                    .collect();
                if ctx.notes_enabled() {
                    print_header("Transactions");
                }
                print_output(&rows, ctx.format)?;
            }
            Ok(())
        }
    }
}
