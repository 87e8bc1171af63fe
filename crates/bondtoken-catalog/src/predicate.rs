//! Record predicates.

use bondtoken_core::BondRecord;

use crate::query::{CategoryFilter, QuerySpec};

/// Returns true if `text` occurs in the record's name or issuer, ignoring case.
///
/// Empty text matches every record.
#[must_use]
pub fn matches_text(record: &BondRecord, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    record.name.to_lowercase().contains(&needle) || record.issuer.to_lowercase().contains(&needle)
}

/// Returns true if the record passes the category filter.
#[must_use]
pub fn matches_category(record: &BondRecord, filter: CategoryFilter) -> bool {
    filter.accepts(record.category)
}

/// Returns true if the record satisfies both the category filter and the
/// free-text search of `query`.
#[must_use]
pub fn matches(record: &BondRecord, query: &QuerySpec) -> bool {
    matches_category(record, query.category) && matches_text(record, &query.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondtoken_core::{BondCategory, Date};
    use rust_decimal_macros::dec;

    fn bond(name: &str, issuer: &str, category: BondCategory) -> BondRecord {
        BondRecord::builder()
            .id(name)
            .name(name)
            .issuer(issuer)
            .category(category)
            .coupon_rate(dec!(4.5))
            .par_value(dec!(1000))
            .token_supply(10)
            .issue_date(Date::from_ymd(2022, 1, 1).unwrap())
            .maturity_date(Date::from_ymd(2032, 1, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_case_insensitive_issuer() {
        let gs = bond("GS Corporate Bond 2032", "Goldman Sachs Group", BondCategory::Corporate);
        assert!(matches_text(&gs, "GOLDMAN"));
        assert!(matches_text(&gs, "sachs gr"));
        assert!(!matches_text(&gs, "morgan"));
    }

    #[test]
    fn test_matches_name() {
        let ust = bond("US Treasury 10-Year Note", "U.S. Department of the Treasury", BondCategory::Treasury);
        assert!(matches_text(&ust, "10-year"));
    }

    #[test]
    fn test_empty_text_and_all_accepts() {
        let muni = bond("NYC GO 2040", "City of New York", BondCategory::Municipal);
        assert!(matches(&muni, &QuerySpec::new()));
    }

    #[test]
    fn test_category_and_text_both_required() {
        let gs = bond("GS Corporate Bond 2032", "Goldman Sachs Group", BondCategory::Corporate);
        let wrong_category = QuerySpec::new()
            .with_text("goldman")
            .with_category(BondCategory::Treasury);
        assert!(!matches(&gs, &wrong_category));

        let wrong_text = QuerySpec::new()
            .with_text("apple")
            .with_category(BondCategory::Corporate);
        assert!(!matches(&gs, &wrong_text));

        let both = QuerySpec::new()
            .with_text("goldman")
            .with_category(BondCategory::Corporate);
        assert!(matches(&gs, &both));
    }
}
