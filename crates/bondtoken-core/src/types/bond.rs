//! Tokenized bond records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BondCategory, Date};
use crate::error::{CatalogError, CatalogResult};

/// Unique identifier of a bond in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondId(String);

impl BondId {
    /// Creates an id from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BondId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A tokenized debt instrument.
///
/// Records are read-only once loaded into a catalog. Rates are expressed in
/// percent (`4.75` means 4.75%), par value in currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Unique identifier.
    pub id: BondId,
    /// Display name, e.g. "GS Corporate Bond 2032".
    pub name: String,
    /// Issuer name.
    pub issuer: String,
    /// Issuer category.
    pub category: BondCategory,
    /// Annual coupon rate in percent.
    pub coupon_rate: Decimal,
    /// Current yield in percent.
    pub current_yield: Decimal,
    /// Face value repaid at maturity.
    pub par_value: Decimal,
    /// Total number of tokens minted for this bond.
    pub token_supply: u64,
    /// Tokens still available for purchase.
    pub tokens_available: u64,
    /// Issue date.
    pub issue_date: Date,
    /// Maturity date, strictly after the issue date.
    pub maturity_date: Date,
    /// Timestamp of the last trade.
    pub last_traded: DateTime<Utc>,
    /// Whether the bond is open for trading.
    pub available: bool,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Credit rating as published by the issuer's agency.
    #[serde(default)]
    pub rating: Option<String>,
}

impl BondRecord {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> BondRecordBuilder {
        BondRecordBuilder::new()
    }

    /// Checks every field invariant of the record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidTerm` if maturity is not after issue,
    /// `CatalogError::InvalidRecord` for any other violated invariant.
    pub fn validate(&self) -> CatalogResult<()> {
        let id = self.id.as_str();
        if id.trim().is_empty() {
            return Err(CatalogError::invalid_record(id, "id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid_record(id, "name must not be empty"));
        }
        if self.coupon_rate < Decimal::ZERO {
            return Err(CatalogError::invalid_record(id, "coupon_rate must be non-negative"));
        }
        if self.par_value <= Decimal::ZERO {
            return Err(CatalogError::invalid_record(id, "par_value must be positive"));
        }
        if self.token_supply == 0 {
            return Err(CatalogError::invalid_record(id, "token_supply must be positive"));
        }
        if self.tokens_available > self.token_supply {
            return Err(CatalogError::invalid_record(
                id,
                format!(
                    "tokens_available ({}) exceeds token_supply ({})",
                    self.tokens_available, self.token_supply
                ),
            ));
        }
        self.check_term()
    }

    /// Checks the term invariant alone (maturity strictly after issue).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidTerm` if the invariant is violated.
    pub fn check_term(&self) -> CatalogResult<()> {
        if self.maturity_date <= self.issue_date {
            return Err(
                CatalogError::invalid_term(self.issue_date, self.maturity_date).for_bond(self.id.as_str()),
            );
        }
        Ok(())
    }

    /// Returns the length of the term in days.
    #[must_use]
    pub fn term_days(&self) -> i64 {
        self.maturity_date - self.issue_date
    }

    /// Returns the par value carried by a single token, rounded to cents.
    #[must_use]
    pub fn token_price(&self) -> Option<Decimal> {
        crate::issuance::token_price(self.par_value, self.token_supply).ok()
    }

    /// Returns the number of tokens already placed with holders.
    #[must_use]
    pub fn tokens_sold(&self) -> u64 {
        self.token_supply.saturating_sub(self.tokens_available)
    }

    /// Returns true if the bond is open for trade and has tokens left.
    #[must_use]
    pub fn is_tradable(&self) -> bool {
        self.available && self.tokens_available > 0
    }
}

/// Builder for [`BondRecord`].
///
/// `tokens_available` defaults to the full supply, `last_traded` to midnight
/// UTC on the issue date, and `available` to true.
#[derive(Debug, Clone, Default)]
pub struct BondRecordBuilder {
    id: Option<BondId>,
    name: Option<String>,
    issuer: Option<String>,
    category: Option<BondCategory>,
    coupon_rate: Decimal,
    current_yield: Option<Decimal>,
    par_value: Option<Decimal>,
    token_supply: Option<u64>,
    tokens_available: Option<u64>,
    issue_date: Option<Date>,
    maturity_date: Option<Date>,
    last_traded: Option<DateTime<Utc>>,
    available: Option<bool>,
    description: Option<String>,
    rating: Option<String>,
}

impl BondRecordBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bond id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(BondId::new(id));
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the issuer.
    #[must_use]
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: BondCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the coupon rate in percent.
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = rate;
        self
    }

    /// Sets the current yield in percent. Defaults to the coupon rate.
    #[must_use]
    pub fn current_yield(mut self, value: Decimal) -> Self {
        self.current_yield = Some(value);
        self
    }

    /// Sets the par value.
    #[must_use]
    pub fn par_value(mut self, par: Decimal) -> Self {
        self.par_value = Some(par);
        self
    }

    /// Sets the token supply.
    #[must_use]
    pub fn token_supply(mut self, supply: u64) -> Self {
        self.token_supply = Some(supply);
        self
    }

    /// Sets the number of tokens still available.
    #[must_use]
    pub fn tokens_available(mut self, available: u64) -> Self {
        self.tokens_available = Some(available);
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the last-traded timestamp.
    #[must_use]
    pub fn last_traded(mut self, ts: DateTime<Utc>) -> Self {
        self.last_traded = Some(ts);
        self
    }

    /// Sets whether the bond is open for trade.
    #[must_use]
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the rating.
    #[must_use]
    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Builds and validates the record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidRecord` if a required field is missing
    /// or an invariant is violated, `CatalogError::InvalidTerm` if maturity
    /// does not follow issue.
    pub fn build(self) -> CatalogResult<BondRecord> {
        let id = self.id.unwrap_or_else(|| BondId::new(""));
        let missing = |field: &str| CatalogError::invalid_record(id.as_str(), format!("missing {field}"));

        let name = self.name.ok_or_else(|| missing("name"))?;
        let issuer = self.issuer.ok_or_else(|| missing("issuer"))?;
        let category = self.category.ok_or_else(|| missing("category"))?;
        let par_value = self.par_value.ok_or_else(|| missing("par_value"))?;
        let token_supply = self.token_supply.ok_or_else(|| missing("token_supply"))?;
        let issue_date = self.issue_date.ok_or_else(|| missing("issue_date"))?;
        let maturity_date = self.maturity_date.ok_or_else(|| missing("maturity_date"))?;

        let last_traded = self
            .last_traded
            .unwrap_or_else(|| issue_date.as_naive_date().and_time(chrono::NaiveTime::MIN).and_utc());

        let record = BondRecord {
            id,
            name,
            issuer,
            category,
            coupon_rate: self.coupon_rate,
            current_yield: self.current_yield.unwrap_or(self.coupon_rate),
            par_value,
            token_supply,
            tokens_available: self.tokens_available.unwrap_or(token_supply),
            issue_date,
            maturity_date,
            last_traded,
            available: self.available.unwrap_or(true),
            description: self.description,
            rating: self.rating,
        };

        record.validate()?;
        Ok(record)
    }
}
