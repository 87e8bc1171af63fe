//! Derived maturity metrics.
//!
//! Both metrics take the reference date explicitly; nothing here reads the
//! wall clock.

use serde::{Deserialize, Serialize};
use std::fmt;

use bondtoken_core::{BondRecord, CatalogError, CatalogResult, Date};

/// Days treated as one year when formatting time to maturity.
pub const DAYS_PER_YEAR: i64 = 365;

/// Days treated as one month when formatting the long form.
pub const DAYS_PER_MONTH: i64 = 30;

/// Distance between a reference date and a bond's maturity.
///
/// The distance is absolute: a bond that has already matured still reports
/// how far away its maturity is, with [`TimeToMaturity::matured`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeToMaturity {
    /// Absolute number of whole days between the reference date and maturity.
    pub days: i64,
    /// True if the maturity date lies before the reference date.
    pub matured: bool,
}

impl TimeToMaturity {
    /// Measures the distance from `now` to `maturity`.
    #[must_use]
    pub fn between(now: Date, maturity: Date) -> Self {
        let signed = maturity - now;
        Self {
            days: signed.abs(),
            matured: signed < 0,
        }
    }

    /// Whole years, remainder dropped.
    #[must_use]
    pub fn years(&self) -> i64 {
        self.days / DAYS_PER_YEAR
    }

    /// Whole 30-day months left over after [`Self::years`].
    #[must_use]
    pub fn remainder_months(&self) -> i64 {
        (self.days % DAYS_PER_YEAR) / DAYS_PER_MONTH
    }

    /// True when the distance is reported in years.
    #[must_use]
    pub fn is_multi_year(&self) -> bool {
        self.days > DAYS_PER_YEAR
    }

    /// Short form: "N years left" beyond a year, otherwise "N days left".
    #[must_use]
    pub fn short_label(&self) -> String {
        if self.is_multi_year() {
            format!("{} years left", self.years())
        } else {
            format!("{} days left", self.days)
        }
    }

    /// Long form: "N years, M months" beyond a year, otherwise "N days".
    #[must_use]
    pub fn long_label(&self) -> String {
        if self.is_multi_year() {
            format!("{} years, {} months", self.years(), self.remainder_months())
        } else {
            format!("{} days", self.days)
        }
    }
}

impl fmt::Display for TimeToMaturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_label())
    }
}

/// Returns the time from `now` to `maturity`.
#[must_use]
pub fn time_to_maturity(maturity: Date, now: Date) -> TimeToMaturity {
    TimeToMaturity::between(now, maturity)
}

/// Percentage of the term between `issue` and `maturity` elapsed at `now`.
///
/// Computed as `floor(elapsed_days * 100 / term_days)` and clamped to
/// `0..=100`, so a reference date before issue gives 0 and one at or after
/// maturity gives 100.
///
/// # Errors
///
/// Returns `CatalogError::InvalidTerm` if `maturity` is not strictly after
/// `issue`.
pub fn maturity_progress(issue: Date, maturity: Date, now: Date) -> CatalogResult<u8> {
    let term = maturity - issue;
    if term <= 0 {
        return Err(CatalogError::invalid_term(issue, maturity));
    }
    let elapsed = now - issue;
    let pct = (elapsed * 100).div_euclid(term).clamp(0, 100);
    Ok(pct as u8)
}

/// Time to maturity of a record.
#[must_use]
pub fn record_time_to_maturity(record: &BondRecord, now: Date) -> TimeToMaturity {
    time_to_maturity(record.maturity_date, now)
}

/// Maturity progress of a record; the error names the record.
///
/// # Errors
///
/// Returns `CatalogError::InvalidTerm` if the record's term is empty or
/// inverted.
pub fn record_progress(record: &BondRecord, now: Date) -> CatalogResult<u8> {
    maturity_progress(record.issue_date, record.maturity_date, now)
        .map_err(|e| e.for_bond(record.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_progress_midpoint() {
        let pct = maturity_progress(d(2020, 1, 1), d(2030, 1, 1), d(2025, 1, 1)).unwrap();
        assert!((49..=51).contains(&pct), "got {pct}");
    }

    #[test]
    fn test_progress_clamped() {
        let issue = d(2020, 1, 1);
        let maturity = d(2030, 1, 1);
        assert_eq!(maturity_progress(issue, maturity, issue).unwrap(), 0);
        assert_eq!(maturity_progress(issue, maturity, d(2019, 6, 1)).unwrap(), 0);
        assert_eq!(maturity_progress(issue, maturity, maturity).unwrap(), 100);
        assert_eq!(maturity_progress(issue, maturity, maturity + 10).unwrap(), 100);
    }

    #[test]
    fn test_progress_floors_before_issue() {
        // floor division keeps a small negative elapsed term below zero
        let pct = maturity_progress(d(2020, 1, 1), d(2120, 1, 1), d(2019, 12, 31)).unwrap();
        assert_eq!(pct, 0);
    }

    #[test]
    fn test_progress_invalid_term() {
        let day = d(2025, 1, 1);
        let err = maturity_progress(day, day, day).unwrap_err();
        assert!(err.is_invalid_term());

        let err = maturity_progress(d(2030, 1, 1), d(2020, 1, 1), day).unwrap_err();
        assert!(err.is_invalid_term());
    }

    #[test]
    fn test_short_label() {
        let now = d(2025, 1, 1);
        assert_eq!(time_to_maturity(d(2025, 3, 1), now).short_label(), "59 days left");
        assert_eq!(time_to_maturity(d(2026, 1, 1), now).short_label(), "365 days left");
        assert_eq!(time_to_maturity(d(2032, 4, 15), now).short_label(), "7 years left");
    }

    #[test]
    fn test_long_label() {
        let now = d(2025, 1, 1);
        let ttm = time_to_maturity(d(2032, 4, 15), now);
        // 7 * 365 + 106 days
        assert_eq!(ttm.days, 2661);
        assert_eq!(ttm.long_label(), "7 years, 3 months");
        assert_eq!(time_to_maturity(d(2025, 1, 31), now).long_label(), "30 days");
    }

    #[test]
    fn test_matured_bond_reports_value() {
        let now = d(2025, 1, 1);
        let ttm = time_to_maturity(d(2023, 1, 1), now);
        assert!(ttm.matured);
        assert_eq!(ttm.days, 731);
        assert_eq!(ttm.to_string(), "2 years left");
    }

    #[test]
    fn test_maturity_today() {
        let now = d(2025, 1, 1);
        let ttm = time_to_maturity(now, now);
        assert_eq!(ttm.days, 0);
        assert!(!ttm.matured);
        assert_eq!(ttm.short_label(), "0 days left");
    }
}
