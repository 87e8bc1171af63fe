//! Domain types for the bond catalog.
//!
//! - [`Date`]: Calendar date for bond terms
//! - [`BondId`]: Unique bond identifier
//! - [`BondCategory`]: Issuer category (Corporate, Government, Municipal, Treasury)
//! - [`BondRecord`]: The read-only tokenized bond entity

mod bond;
mod category;
mod date;

pub use bond::{BondId, BondRecord, BondRecordBuilder};
pub use category::BondCategory;
pub use date::Date;
