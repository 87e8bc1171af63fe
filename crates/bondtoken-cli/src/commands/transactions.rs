//! Transactions command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondtoken_catalog::{filter_transactions, TransactionQuery};
use bondtoken_core::{BondId, Transaction, TransactionKind, TransactionStatus};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_amount, paint, print_info, print_output};

/// Arguments for the transactions command.
#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// Only transactions on this bond id
    #[arg(short, long)]
    pub bond: Option<String>,

    /// Only transactions in this state: completed, pending, processing, failed
    #[arg(short, long)]
    pub status: Option<TransactionStatus>,

    /// Only transactions of this kind: purchase, sale, coupon-payment, maturity, issuance
    #[arg(short, long)]
    pub kind: Option<TransactionKind>,
}

/// One row of transaction output.
#[derive(Debug, Serialize, Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Time")]
    pub timestamp: String,
    #[tabled(rename = "Bond")]
    pub bond_name: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Counterparty")]
    pub counterparty: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl TransactionRow {
    /// Flattens a transaction for display; the short id is used in tables.
    pub fn from_transaction(txn: &Transaction, format: OutputFormat) -> Self {
        let id = match format {
            OutputFormat::Table => txn.short_id().to_string(),
            OutputFormat::Json | OutputFormat::Csv => txn.id.clone(),
        };
        Self {
            id,
            timestamp: txn.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            bond_name: txn.bond_name.clone(),
            kind: paint(txn.kind.label(), txn.kind.tone(), format),
            amount: format_amount(&txn.amount),
            counterparty: txn.counterparty.clone(),
            status: paint(&txn.status.to_string(), txn.status.tone(), format),
        }
    }
}

/// Execute the transactions command.
pub fn execute(args: TransactionsArgs, ctx: &Context) -> Result<()> {
    let history = ctx.transactions()?;

    let query = TransactionQuery {
        bond_id: args.bond.map(BondId::new),
        status: args.status,
        kind: args.kind,
    };
    let matched = filter_transactions(&history, &query);
    tracing::debug!(matched = matched.len(), total = history.len(), "transaction filter");

    let rows: Vec<TransactionRow> = matched
        .iter()
        .map(|t| TransactionRow::from_transaction(t, ctx.format))
        .collect();

    if ctx.notes_enabled() {
        print_info(&format!("{} of {} transactions", rows.len(), history.len()));
    }
    print_output(&rows, ctx.format)
}
