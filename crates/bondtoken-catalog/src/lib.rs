//! # Bondtoken Catalog
//!
//! Query engine for a read-only catalog of tokenized bonds.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every operation takes its inputs explicitly, the
//!   reference date included; nothing reads the wall clock
//! - **Read-only records**: Queries never reorder or modify the catalog
//! - **Stable ranking**: Records that tie on the sort key keep catalog order
//!
//! ## Features
//!
//! - **Predicates**: Case-insensitive text search over name and issuer, plus
//!   an optional category restriction
//! - **Ranking**: By current yield, maturity, coupon or par value
//! - **Derived metrics**: Time to maturity and maturity progress
//! - **Projection**: Ranked records paired with their metrics
//! - **Portfolio and ledger views**: Holding, contract and transaction search
//! - **Market insights**: Per-category yields and term averages
//! - **Loading**: CSV and JSON catalog and transaction files
//!
//! ## Quick Start
//!
//! ```rust
//! use bondtoken_catalog::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let bond = BondRecord::builder()
//!     .id("1")
//!     .name("GS Corporate Bond 2032")
//!     .issuer("Goldman Sachs Group")
//!     .category(BondCategory::Corporate)
//!     .coupon_rate(dec!(4.75))
//!     .par_value(dec!(1000000))
//!     .token_supply(1000)
//!     .issue_date(Date::from_ymd(2022, 4, 15).unwrap())
//!     .maturity_date(Date::from_ymd(2032, 4, 15).unwrap())
//!     .build()
//!     .unwrap();
//! let catalog = BondCatalog::new(vec![bond]).unwrap();
//!
//! let query = QuerySpec::new().with_text("goldman").with_sort(SortKey::Maturity);
//! let now = Date::from_ymd(2027, 4, 16).unwrap();
//! let views = run_query(&catalog, &query, now).unwrap();
//! assert_eq!(views[0].progress_pct, 50);
//! ```
//!
//! ## Module Overview
//!
//! - [`query`] - Query specification, category filter and sort key
//! - [`predicate`] - Record predicates
//! - [`ranking`] - Stable ordering by sort key
//! - [`metrics`] - Time to maturity and maturity progress
//! - [`projection`] - Display views and the full query pipeline
//! - [`catalog`] - The immutable record store
//! - [`portfolio`] - Holding and contract search
//! - [`ledger`] - Transaction filtering
//! - [`insights`] - Market summary statistics
//! - [`loader`] - File loading

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod catalog;
pub mod insights;
pub mod ledger;
pub mod loader;
pub mod metrics;
pub mod portfolio;
pub mod predicate;
pub mod projection;
pub mod query;
pub mod ranking;

// Re-export the store and query types
pub use catalog::BondCatalog;
pub use query::{CategoryFilter, QuerySpec, SortKey};

// Re-export metrics
pub use metrics::{maturity_progress, time_to_maturity, TimeToMaturity};

// Re-export projection
pub use projection::{project_all, run_query, BondView};

// Re-export views
pub use insights::{market_insights, MarketInsights};
pub use ledger::{filter_transactions, TransactionQuery};
pub use portfolio::{search_contracts, search_holdings, select_holdings};

// Re-export loading
pub use loader::{load_catalog, load_transactions, FileFormat};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::BondCatalog;
    pub use crate::insights::{market_insights, MarketInsights};
    pub use crate::ledger::{filter_transactions, TransactionQuery};
    pub use crate::metrics::{maturity_progress, time_to_maturity, TimeToMaturity};
    pub use crate::portfolio::{search_contracts, search_holdings, select_holdings};
    pub use crate::projection::{run_query, BondView};
    pub use crate::query::{CategoryFilter, QuerySpec, SortKey};

    pub use bondtoken_core::prelude::*;
}
