//! Closed status enumerations and their display tones.
//!
//! Each enumeration parses only its known names; an unrecognised string is
//! an error rather than a neutral default. Every variant maps to exactly one
//! [`StatusTone`] through an exhaustive `match`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Visual tone used to render a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Danger,
    /// Blue.
    Info,
    /// Purple.
    Highlight,
    /// Platform brand accent.
    Brand,
    /// Gray.
    Neutral,
}

// =============================================================================
// KYC
// =============================================================================

/// Know-your-customer verification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycLevel {
    /// Individual, identity only.
    Basic,
    /// Individual with address and source of funds.
    Advanced,
    /// Legal entity.
    Institutional,
}

impl KycLevel {
    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Basic => "Basic KYC",
            Self::Advanced => "Advanced KYC",
            Self::Institutional => "Institutional KYC",
        }
    }

    /// Returns the documents required at this level.
    #[must_use]
    pub fn requirements(&self) -> &'static [&'static str] {
        match self {
            Self::Basic => &[
                "Email verification",
                "Phone number verification",
                "Personal identity document",
            ],
            Self::Advanced => &[
                "Email verification",
                "Phone number verification",
                "Personal identity document",
                "Proof of address",
                "Source of funds declaration",
            ],
            Self::Institutional => &[
                "Company registration documents",
                "Director identification",
                "Authorized representatives",
                "Beneficial ownership declaration",
                "AML compliance documentation",
                "Regulatory certifications",
            ],
        }
    }

    /// Returns the badge tone for a holder at this level.
    #[must_use]
    pub fn tone(&self, verified: bool) -> StatusTone {
        match (self, verified) {
            (_, false) => StatusTone::Warning,
            (Self::Basic | Self::Advanced, true) => StatusTone::Success,
            (Self::Institutional, true) => StatusTone::Brand,
        }
    }
}

impl fmt::Display for KycLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Institutional => "institutional",
        })
    }
}

impl FromStr for KycLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            "institutional" => Ok(Self::Institutional),
            _ => Err(CatalogError::unknown_variant("KYC level", s)),
        }
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// What a ledger transaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Tokens bought.
    Purchase,
    /// Tokens sold.
    Sale,
    /// Periodic interest paid to holders.
    #[serde(rename = "Coupon Payment")]
    CouponPayment,
    /// Principal repaid at maturity.
    Maturity,
    /// Bond minted.
    Issuance,
}

impl TransactionKind {
    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Sale => "Sale",
            Self::CouponPayment => "Coupon Payment",
            Self::Maturity => "Maturity",
            Self::Issuance => "Issuance",
        }
    }

    /// Returns the badge tone.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Purchase => StatusTone::Success,
            Self::Sale => StatusTone::Info,
            Self::CouponPayment => StatusTone::Highlight,
            Self::Maturity => StatusTone::Warning,
            Self::Issuance => StatusTone::Brand,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "purchase" => Ok(Self::Purchase),
            "sale" => Ok(Self::Sale),
            "coupon payment" | "coupon" => Ok(Self::CouponPayment),
            "maturity" => Ok(Self::Maturity),
            "issuance" => Ok(Self::Issuance),
            _ => Err(CatalogError::unknown_variant("transaction kind", s)),
        }
    }
}

/// Settlement state of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Settled.
    Completed,
    /// Submitted, not yet picked up.
    Pending,
    /// Being settled.
    Processing,
    /// Rejected or rolled back.
    Failed,
}

impl TransactionStatus {
    /// Returns the indicator tone.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Completed => StatusTone::Success,
            Self::Pending => StatusTone::Warning,
            Self::Processing => StatusTone::Info,
            Self::Failed => StatusTone::Danger,
        }
    }

    /// Returns true once the transaction can no longer change state.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Failed => "Failed",
        })
    }
}

impl FromStr for TransactionStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "failed" => Ok(Self::Failed),
            _ => Err(CatalogError::unknown_variant("transaction status", s)),
        }
    }
}

// =============================================================================
// CONTRACTS
// =============================================================================

/// Lifecycle state of a ledger contract backing a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Live on the ledger.
    Active,
    /// Awaiting signatures.
    Pending,
    /// Archived after maturity or termination.
    Expired,
}

impl ContractStatus {
    /// Returns the badge tone.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Active => StatusTone::Success,
            Self::Pending => StatusTone::Warning,
            Self::Expired => StatusTone::Neutral,
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Expired => "expired",
        })
    }
}

impl FromStr for ContractStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "expired" => Ok(Self::Expired),
            _ => Err(CatalogError::unknown_variant("contract status", s)),
        }
    }
}
