//! # Bondtoken Core
//!
//! Core domain types for the Bondtoken tokenized bond catalog.
//!
//! This crate provides the building blocks shared by the catalog engine and
//! the command-line tool:
//!
//! - **Types**: `Date`, `BondId`, `BondCategory` and the read-only `BondRecord`
//! - **Status**: Closed enums for KYC levels, transactions and contracts, each
//!   with an exhaustive mapping to a display tone
//! - **Transactions**: Ledger entries and contract summaries
//! - **Issuance**: Validation of new bond issuance drafts
//!
//! ## Example
//!
//! ```rust
//! use bondtoken_core::prelude::*;
//!
//! let issue = Date::from_ymd(2022, 4, 15).unwrap();
//! let maturity = Date::from_ymd(2032, 4, 15).unwrap();
//! assert!(maturity > issue);
//! assert_eq!("treasury".parse::<BondCategory>().unwrap(), BondCategory::Treasury);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod issuance;
pub mod status;
pub mod transaction;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::issuance::{token_price, IssuanceDraft};
    pub use crate::status::{
        ContractStatus, KycLevel, StatusTone, TransactionKind, TransactionStatus,
    };
    pub use crate::transaction::{ContractSummary, Transaction};
    pub use crate::types::{BondCategory, BondId, BondRecord, BondRecordBuilder, Date};
}

// Re-export commonly used types at crate root
pub use error::{CatalogError, CatalogResult};
pub use status::{ContractStatus, KycLevel, StatusTone, TransactionKind, TransactionStatus};
pub use transaction::{ContractSummary, Transaction};
pub use types::{BondCategory, BondId, BondRecord, Date};
