//! Ledger transactions and contract summaries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::status::{ContractStatus, TransactionKind, TransactionStatus};
use crate::types::{BondId, Date};

/// A single token movement or cash event recorded on the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: String,
    /// When the transaction was recorded.
    pub timestamp: DateTime<Utc>,
    /// Bond the transaction refers to.
    pub bond_id: BondId,
    /// Bond name at the time of the transaction.
    pub bond_name: String,
    /// What happened.
    pub kind: TransactionKind,
    /// Cash amount in currency units.
    pub amount: Decimal,
    /// The other side of the trade or payment.
    pub counterparty: String,
    /// Settlement state.
    pub status: TransactionStatus,
    /// Hash of the ledger transaction.
    pub ledger_tx_hash: String,
}

impl Transaction {
    /// Returns the first eight characters of the id, for compact listings.
    #[must_use]
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Summary of a ledger contract encoding a bond's terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSummary {
    /// Ledger contract id.
    pub contract_id: String,
    /// Lifecycle state.
    pub status: ContractStatus,
    /// Name of the bond encoded by the contract.
    pub bond_name: String,
    /// Issue date of the bond.
    pub issue_date: Date,
    /// Parties to the contract.
    pub participants: Vec<String>,
}
