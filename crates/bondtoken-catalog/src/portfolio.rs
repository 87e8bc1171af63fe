//! Portfolio views: a holder's bonds and the contracts behind them.
//!
//! Portfolio search has no category filter and keeps the holder's own order.

use bondtoken_core::{BondId, BondRecord, CatalogResult, ContractSummary};

use crate::catalog::BondCatalog;
use crate::predicate::matches_text;

/// Resolves a holder's bond ids against the catalog, in the given order.
///
/// # Errors
///
/// Returns `CatalogError::UnknownBond` for the first id not in the catalog.
pub fn select_holdings<'a>(catalog: &'a BondCatalog, ids: &[BondId]) -> CatalogResult<Vec<&'a BondRecord>> {
    ids.iter().map(|id| catalog.require(id.as_str())).collect()
}

/// Returns the holdings whose name or issuer contains `text`, ignoring case.
#[must_use]
pub fn search_holdings<'a, I>(holdings: I, text: &str) -> Vec<&'a BondRecord>
where
    I: IntoIterator<Item = &'a BondRecord>,
{
    holdings
        .into_iter()
        .filter(|record| matches_text(record, text))
        .collect()
}

/// Returns the contracts whose bond name contains `text`, ignoring case.
#[must_use]
pub fn search_contracts<'a>(contracts: &'a [ContractSummary], text: &str) -> Vec<&'a ContractSummary> {
    let needle = text.to_lowercase();
    contracts
        .iter()
        .filter(|c| c.bond_name.to_lowercase().contains(&needle))
        .collect()
}
