//! Market-level summary statistics over a set of bonds.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bondtoken_core::{BondCategory, BondRecord, CatalogError, CatalogResult};

use crate::metrics::DAYS_PER_YEAR;

/// Aggregates shown above a bond listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    /// Number of bonds considered.
    pub bond_count: usize,
    /// Bonds open for trade with tokens left.
    pub tradable_count: usize,
    /// Mean current yield per category present, in percent, rounded to 2 dp.
    pub avg_yield_by_category: BTreeMap<BondCategory, Decimal>,
    /// Mean original term in years; `None` when there are no bonds.
    pub avg_term_years: Option<f64>,
    /// Sum of par values.
    pub total_par_value: Decimal,
}

impl MarketInsights {
    /// Returns the mean yield of one category, if any bond has it.
    #[must_use]
    pub fn avg_yield(&self, category: BondCategory) -> Option<Decimal> {
        self.avg_yield_by_category.get(&category).copied()
    }
}

/// Computes market insights over `records`.
///
/// # Errors
///
/// Returns `CatalogError::Overflow` if a yield or par value sum leaves the
/// decimal range.
pub fn market_insights<'a, I>(records: I) -> CatalogResult<MarketInsights>
where
    I: IntoIterator<Item = &'a BondRecord>,
{
    let mut yield_sums: BTreeMap<BondCategory, (Decimal, u32)> = BTreeMap::new();
    let mut insights = MarketInsights::default();
    let mut term_days_sum = 0i64;

    for record in records {
        insights.bond_count += 1;
        if record.is_tradable() {
            insights.tradable_count += 1;
        }
        insights.total_par_value = insights
            .total_par_value
            .checked_add(record.par_value)
            .ok_or_else(|| CatalogError::overflow("total par value"))?;
        term_days_sum += record.term_days();

        let entry = yield_sums.entry(record.category).or_insert((Decimal::ZERO, 0));
        entry.0 = entry
            .0
            .checked_add(record.current_yield)
            .ok_or_else(|| CatalogError::overflow(format!("average {} yield", record.category)))?;
        entry.1 += 1;
    }

    insights.avg_yield_by_category = yield_sums
        .into_iter()
        .map(|(category, (sum, n))| (category, (sum / Decimal::from(n)).round_dp(2)))
        .collect();

    if insights.bond_count > 0 {
        insights.avg_term_years =
            Some(term_days_sum as f64 / insights.bond_count as f64 / DAYS_PER_YEAR as f64);
    }

    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondtoken_core::Date;
    use rust_decimal_macros::dec;

    fn bond(id: &str, category: BondCategory, current_yield: Decimal, years: i32, available: bool) -> BondRecord {
        let issue = Date::from_ymd(2021, 1, 1).unwrap();
        BondRecord::builder()
            .id(id)
            .name(id)
            .issuer("Issuer")
            .category(category)
            .coupon_rate(dec!(4.0))
            .current_yield(current_yield)
            .par_value(dec!(1000))
            .token_supply(10)
            .issue_date(issue)
            .maturity_date(issue.add_days(i64::from(years) * 365))
            .available(available)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty() {
        let insights = market_insights(std::iter::empty()).unwrap();
        assert_eq!(insights.bond_count, 0);
        assert!(insights.avg_term_years.is_none());
        assert!(insights.avg_yield_by_category.is_empty());
    }

    #[test]
    fn test_averages() {
        let records = vec![
            bond("a", BondCategory::Corporate, dec!(4.5), 5, true),
            bond("b", BondCategory::Corporate, dec!(5.2), 10, false),
            bond("c", BondCategory::Treasury, dec!(4.1), 3, true),
        ];
        let insights = market_insights(&records).unwrap();

        assert_eq!(insights.bond_count, 3);
        assert_eq!(insights.tradable_count, 2);
        assert_eq!(insights.avg_yield(BondCategory::Corporate), Some(dec!(4.85)));
        assert_eq!(insights.avg_yield(BondCategory::Treasury), Some(dec!(4.1)));
        assert_eq!(insights.avg_yield(BondCategory::Municipal), None);
        assert_eq!(insights.total_par_value, dec!(3000));
        assert_relative_eq!(insights.avg_term_years.unwrap(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_par_value_sum_overflow_is_an_error() {
        let mut a = bond("a", BondCategory::Corporate, dec!(4.0), 5, true);
        let mut b = bond("b", BondCategory::Corporate, dec!(4.0), 5, true);
        a.par_value = Decimal::MAX;
        b.par_value = Decimal::MAX;
        assert!(a.validate().is_ok());

        let err = market_insights(&[a, b]).unwrap_err();
        assert_eq!(err, CatalogError::overflow("total par value"));
    }
}
