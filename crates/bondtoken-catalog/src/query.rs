//! Query specifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use bondtoken_core::{BondCategory, CatalogError};

/// Category restriction applied by a query.
///
/// Serializes as its display form: `"all"` or a lowercase category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only the given category passes.
    Only(BondCategory),
}

impl CategoryFilter {
    /// Returns true if `category` passes the filter.
    #[must_use]
    pub fn accepts(&self, category: BondCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<BondCategory> for CategoryFilter {
    fn from(category: BondCategory) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{}", category.name().to_lowercase()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<BondCategory>().map(Self::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// Ordering applied to a query result.
///
/// Yield, coupon and value sort highest first; maturity sorts earliest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Current yield, descending.
    #[default]
    Yield,
    /// Maturity date, ascending.
    Maturity,
    /// Coupon rate, descending.
    Coupon,
    /// Par value, descending.
    Value,
}

impl SortKey {
    /// All keys, in menu order.
    pub const ALL: [SortKey; 4] = [Self::Yield, Self::Maturity, Self::Coupon, Self::Value];

    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yield => "yield",
            Self::Maturity => "maturity",
            Self::Coupon => "coupon",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yield" => Ok(Self::Yield),
            "maturity" => Ok(Self::Maturity),
            "coupon" => Ok(Self::Coupon),
            "value" => Ok(Self::Value),
            _ => Err(CatalogError::unknown_variant("sort key", s)),
        }
    }
}

/// A single search over the catalog.
///
/// # Examples
///
/// ```
/// use bondtoken_catalog::{QuerySpec, SortKey};
/// use bondtoken_core::BondCategory;
///
/// let query = QuerySpec::new()
///     .with_text("goldman")
///     .with_category(BondCategory::Corporate)
///     .with_sort(SortKey::Coupon);
/// assert_eq!(query.sort, SortKey::Coupon);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Case-insensitive substring matched against name and issuer.
    pub text: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Result ordering.
    pub sort: SortKey,
}

impl QuerySpec {
    /// Creates a query that matches everything, sorted by yield.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Municipal".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(BondCategory::Municipal)
        );
        assert!("junk".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_accepts() {
        assert!(CategoryFilter::All.accepts(BondCategory::Treasury));
        let only = CategoryFilter::Only(BondCategory::Corporate);
        assert!(only.accepts(BondCategory::Corporate));
        assert!(!only.accepts(BondCategory::Government));
    }

    #[test]
    fn test_category_filter_serde_uses_display_form() {
        let only = CategoryFilter::Only(BondCategory::Corporate);
        assert_eq!(serde_json::to_value(only).unwrap(), serde_json::json!("corporate"));
        assert_eq!(serde_json::to_value(CategoryFilter::All).unwrap(), serde_json::json!("all"));

        let parsed: CategoryFilter = serde_json::from_str("\"Treasury\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Only(BondCategory::Treasury));
        assert!(serde_json::from_str::<CategoryFilter>("\"sovereign\"").is_err());

        let query = QuerySpec::new().with_category(BondCategory::Municipal);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["category"], "municipal");
        assert_eq!(serde_json::from_value::<QuerySpec>(json).unwrap(), query);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert!("rating".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_defaults() {
        let query = QuerySpec::new();
        assert!(query.text.is_empty());
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.sort, SortKey::Yield);
    }
}
