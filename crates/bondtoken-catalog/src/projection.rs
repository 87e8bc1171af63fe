//! Query results paired with their derived metrics.
//!
//! This is the only shape the engine hands to a rendering layer.

use serde::Serialize;

use bondtoken_core::{BondRecord, CatalogResult, Date};

use crate::catalog::BondCatalog;
use crate::metrics::{record_progress, record_time_to_maturity, TimeToMaturity};
use crate::query::QuerySpec;

/// A bond record ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondView<'a> {
    /// The underlying record.
    pub record: &'a BondRecord,
    /// Distance from the reference date to maturity.
    pub time_to_maturity: TimeToMaturity,
    /// Percentage of the term elapsed, `0..=100`.
    pub progress_pct: u8,
}

impl<'a> BondView<'a> {
    /// Derives the metrics of `record` at `now`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidTerm` if the record's maturity does not
    /// follow its issue date.
    pub fn project(record: &'a BondRecord, now: Date) -> CatalogResult<Self> {
        Ok(Self {
            record,
            time_to_maturity: record_time_to_maturity(record, now),
            progress_pct: record_progress(record, now)?,
        })
    }

    /// Like [`BondView::project`], substituting `fallback_pct` when the term
    /// is invalid.
    #[must_use]
    pub fn project_or(record: &'a BondRecord, now: Date, fallback_pct: u8) -> Self {
        Self::project(record, now).unwrap_or_else(|err| {
            tracing::warn!(bond = %record.id, error = %err, "substituting maturity progress");
            Self {
                record,
                time_to_maturity: record_time_to_maturity(record, now),
                progress_pct: fallback_pct,
            }
        })
    }
}

/// Projects every record, in order.
///
/// # Errors
///
/// Fails on the first record with an invalid term.
pub fn project_all<'a, I>(records: I, now: Date) -> CatalogResult<Vec<BondView<'a>>>
where
    I: IntoIterator<Item = &'a BondRecord>,
{
    records
        .into_iter()
        .map(|record| BondView::project(record, now))
        .collect()
}

/// Filters, ranks and projects the catalog for one query.
///
/// An empty result is a valid, empty `Vec`.
///
/// # Errors
///
/// Returns `CatalogError::InvalidTerm` naming the first matching record
/// whose term is invalid.
pub fn run_query<'a>(
    catalog: &'a BondCatalog,
    query: &QuerySpec,
    now: Date,
) -> CatalogResult<Vec<BondView<'a>>> {
    let ranked = catalog.search(query);
    tracing::debug!(
        text = %query.text,
        category = %query.category,
        sort = %query.sort,
        matched = ranked.len(),
        total = catalog.len(),
        "catalog query"
    );
    project_all(ranked, now)
}
