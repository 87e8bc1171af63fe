//! Stable ordering of query results.

use std::cmp::Ordering;

use bondtoken_core::BondRecord;

use crate::query::SortKey;

/// Compares two records under `key`.
///
/// Yield, coupon and value compare highest first; maturity compares
/// earliest first. Equal keys compare `Equal` so a stable sort keeps
/// their input order.
#[must_use]
pub fn compare(a: &BondRecord, b: &BondRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Yield => b.current_yield.cmp(&a.current_yield),
        SortKey::Maturity => a.maturity_date.cmp(&b.maturity_date),
        SortKey::Coupon => b.coupon_rate.cmp(&a.coupon_rate),
        SortKey::Value => b.par_value.cmp(&a.par_value),
    }
}

/// Returns the records ordered by `key`.
///
/// The input is left untouched; ties keep their input order.
#[must_use]
pub fn rank<'a, I>(records: I, key: SortKey) -> Vec<&'a BondRecord>
where
    I: IntoIterator<Item = &'a BondRecord>,
{
    let mut ranked: Vec<&BondRecord> = records.into_iter().collect();
    // slice::sort_by is stable
    ranked.sort_by(|a, b| compare(a, b, key));
    ranked
}
