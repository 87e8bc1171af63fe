//! Bond issuer categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Category of a tokenized bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BondCategory {
    /// Corporate issuer.
    Corporate,
    /// Sovereign or agency issuer.
    Government,
    /// State or local issuer.
    Municipal,
    /// Treasury bills, notes and bonds.
    Treasury,
}

impl BondCategory {
    /// All categories in display order.
    pub const ALL: [BondCategory; 4] = [
        BondCategory::Corporate,
        BondCategory::Government,
        BondCategory::Municipal,
        BondCategory::Treasury,
    ];

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Corporate => "Corporate",
            Self::Government => "Government",
            Self::Municipal => "Municipal",
            Self::Treasury => "Treasury",
        }
    }
}

impl fmt::Display for BondCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BondCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "corporate" => Ok(Self::Corporate),
            "government" => Ok(Self::Government),
            "municipal" => Ok(Self::Municipal),
            "treasury" => Ok(Self::Treasury),
            _ => Err(CatalogError::unknown_variant("bond category", s)),
        }
    }
}
