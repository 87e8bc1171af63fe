//! Insights command implementation.

use anyhow::Result;
use clap::Args;

use bondtoken_catalog::{market_insights, MarketInsights};
use bondtoken_core::BondCategory;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_amount, format_percent, print_json, print_output, KeyValue};

/// Arguments for the insights command.
#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Restrict to one category
    #[arg(short, long)]
    pub category: Option<BondCategory>,
}

fn insight_rows(insights: &MarketInsights) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("Bonds", insights.bond_count.to_string()),
        KeyValue::new("Tradable", insights.tradable_count.to_string()),
        KeyValue::new("Total Par Value", format_amount(&insights.total_par_value)),
        KeyValue::new(
            "Average Term",
            insights
                .avg_term_years
                .map_or_else(|| "-".to_string(), |years| format!("{years:.1} years")),
        ),
    ];
    for (category, avg) in &insights.avg_yield_by_category {
        rows.push(KeyValue::new(format!("Avg Yield ({category})"), format_percent(*avg)));
    }
    rows
}

/// Execute the insights command.
pub fn execute(args: InsightsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let insights = match args.category {
        Some(category) => market_insights(catalog.iter().filter(|r| r.category == category))?,
        None => market_insights(&catalog)?,
    };

    match ctx.format {
        OutputFormat::Json => print_json(&insights),
        OutputFormat::Table | OutputFormat::Csv => print_output(&insight_rows(&insights), ctx.format),
    }
}
