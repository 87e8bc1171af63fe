//! Search command implementation.
//!
//! Filters the catalog by text and category, ranks it, and shows each bond
//! with its time to maturity and maturity progress.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use bondtoken_catalog::{run_query, BondView, CategoryFilter, QuerySpec, SortKey};
use bondtoken_core::{BondCategory, Date};

use crate::commands::{reference_date, Context};
use crate::output::{format_percent, print_info, print_output};

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to find in bond names and issuers (case-insensitive)
    #[arg(long, default_value = "")]
    pub query: String,

    /// Category: all, corporate, government, municipal, treasury
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Sort key: yield, maturity, coupon, value
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Show time to maturity as years and months
    #[arg(long)]
    pub long: bool,
}

/// One row of search output.
#[derive(Debug, Serialize, Tabled)]
pub struct BondRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Issuer")]
    pub issuer: String,
    #[tabled(rename = "Category")]
    pub category: BondCategory,
    #[tabled(rename = "Coupon", display_with = "display_percent")]
    pub coupon_rate: Decimal,
    #[tabled(rename = "Yield", display_with = "display_percent")]
    pub current_yield: Decimal,
    #[tabled(rename = "Par Value")]
    pub par_value: Decimal,
    #[tabled(rename = "Maturity")]
    pub maturity_date: Date,
    #[tabled(rename = "Remaining")]
    pub time_to_maturity: String,
    #[tabled(rename = "Progress %")]
    pub progress_pct: u8,
}

fn display_percent(value: &Decimal) -> String {
    format_percent(*value)
}

impl BondRow {
    /// Flattens a view for display.
    pub fn from_view(view: &BondView<'_>, long: bool) -> Self {
        let record = view.record;
        let ttm = &view.time_to_maturity;
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            issuer: record.issuer.clone(),
            category: record.category,
            coupon_rate: record.coupon_rate,
            current_yield: record.current_yield,
            par_value: record.par_value,
            maturity_date: record.maturity_date,
            time_to_maturity: if long { ttm.long_label() } else { ttm.short_label() },
            progress_pct: view.progress_pct,
        }
    }
}

/// Execute the search command.
pub fn execute(args: SearchArgs, ctx: &Context) -> Result<()> {
    let now = reference_date(args.as_of.as_deref())?;
    let catalog = ctx.catalog()?;

    let query = QuerySpec::new()
        .with_text(args.query)
        .with_category(args.category)
        .with_sort(args.sort.unwrap_or(ctx.default_sort));

    let views = run_query(&catalog, &query, now)?;
    let rows: Vec<BondRow> = views.iter().map(|v| BondRow::from_view(v, args.long)).collect();

    if ctx.notes_enabled() {
        print_info(&format!(
            "{} of {} bonds, sorted by {}, as of {}",
            rows.len(),
            catalog.len(),
            query.sort,
            now
        ));
    }
    print_output(&rows, ctx.format)
}
