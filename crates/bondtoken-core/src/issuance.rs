//! Bond issuance drafts.
//!
//! An [`IssuanceDraft`] collects the terms an issuer enters before minting a
//! new tokenized bond. Validation happens field by field so the first
//! rejected field can be reported back to the issuer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{BondCategory, BondId, BondRecord, Date};

/// Longest term accepted for a new issuance, in years.
pub const MAX_MATURITY_YEARS: u32 = 50;

/// Face value carried by one token of an issue, rounded to cents.
///
/// # Errors
///
/// Returns `CatalogError::InvalidIssuance` if `par_value` is not positive or
/// `token_supply` is zero.
pub fn token_price(par_value: Decimal, token_supply: u64) -> CatalogResult<Decimal> {
    if par_value <= Decimal::ZERO {
        return Err(CatalogError::invalid_issuance("par_value", "must be positive"));
    }
    if token_supply == 0 {
        return Err(CatalogError::invalid_issuance("token_supply", "must be positive"));
    }
    Ok((par_value / Decimal::from(token_supply)).round_dp(2))
}

/// Terms of a bond about to be issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuanceDraft {
    /// Bond name.
    pub name: String,
    /// Issuing entity.
    pub issuer: String,
    /// Issuer category.
    pub category: BondCategory,
    /// Annual coupon rate in percent.
    pub coupon_rate: Decimal,
    /// Term in whole years.
    pub maturity_years: u32,
    /// Face value of the whole issue.
    pub par_value: Decimal,
    /// Number of tokens the issue is split into.
    pub token_supply: u64,
    /// Offering description.
    #[serde(default)]
    pub description: Option<String>,
}

impl IssuanceDraft {
    /// Checks every field of the draft.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidIssuance` naming the first invalid field.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid_issuance("name", "must not be empty"));
        }
        if self.issuer.trim().is_empty() {
            return Err(CatalogError::invalid_issuance("issuer", "must not be empty"));
        }
        if self.coupon_rate < Decimal::ZERO || self.coupon_rate > dec!(100) {
            return Err(CatalogError::invalid_issuance(
                "coupon_rate",
                format!("{} is outside 0-100%", self.coupon_rate),
            ));
        }
        if !(1..=MAX_MATURITY_YEARS).contains(&self.maturity_years) {
            return Err(CatalogError::invalid_issuance(
                "maturity_years",
                format!("{} is outside 1-{MAX_MATURITY_YEARS}", self.maturity_years),
            ));
        }
        if self.par_value <= Decimal::ZERO {
            return Err(CatalogError::invalid_issuance("par_value", "must be positive"));
        }
        if self.token_supply == 0 {
            return Err(CatalogError::invalid_issuance("token_supply", "must be positive"));
        }
        Ok(())
    }

    /// Returns the face value represented by one token, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidIssuance` if the supply is zero.
    pub fn token_price(&self) -> CatalogResult<Decimal> {
        token_price(self.par_value, self.token_supply)
    }

    /// Turns the draft into a catalog record issued on `issue_date`.
    ///
    /// The whole supply is available, the current yield starts at the coupon
    /// rate, and `now` becomes the last-traded timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or the maturity date cannot
    /// be represented.
    pub fn into_record(self, id: BondId, issue_date: Date, now: DateTime<Utc>) -> CatalogResult<BondRecord> {
        self.validate()?;
        let maturity_date = issue_date.add_years(self.maturity_years as i32)?;

        let record = BondRecord {
            id,
            name: self.name,
            issuer: self.issuer,
            category: self.category,
            coupon_rate: self.coupon_rate,
            current_yield: self.coupon_rate,
            par_value: self.par_value,
            token_supply: self.token_supply,
            tokens_available: self.token_supply,
            issue_date,
            maturity_date,
            last_traded: now,
            available: true,
            description: self.description,
            rating: None,
        };
        record.validate()?;
        Ok(record)
    }
}
