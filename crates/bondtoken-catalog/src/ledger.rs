//! Transaction history views.

use serde::{Deserialize, Serialize};

use bondtoken_core::{BondId, Transaction, TransactionKind, TransactionStatus};

/// Restrictions applied to a transaction listing. `None` fields match all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Only transactions on this bond.
    pub bond_id: Option<BondId>,
    /// Only transactions in this state.
    pub status: Option<TransactionStatus>,
    /// Only transactions of this kind.
    pub kind: Option<TransactionKind>,
}

impl TransactionQuery {
    /// Creates a query matching every transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one bond.
    #[must_use]
    pub fn for_bond(mut self, id: impl Into<BondId>) -> Self {
        self.bond_id = Some(id.into());
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to one kind.
    #[must_use]
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns true if `txn` passes every restriction.
    #[must_use]
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.bond_id.as_ref().map_or(true, |id| &txn.bond_id == id)
            && self.status.map_or(true, |s| txn.status == s)
            && self.kind.map_or(true, |k| txn.kind == k)
    }
}

/// Returns the matching transactions, newest first.
///
/// Transactions with equal timestamps keep their input order.
#[must_use]
pub fn filter_transactions<'a>(txns: &'a [Transaction], query: &TransactionQuery) -> Vec<&'a Transaction> {
    let mut out: Vec<&Transaction> = txns.iter().filter(|t| query.matches(t)).collect();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn txn(id: &str, day: u32, bond: &str, status: TransactionStatus) -> Transaction {
        Transaction {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 1, day, 10, 0, 0).unwrap(),
            bond_id: BondId::new(bond),
            bond_name: format!("Bond {bond}"),
            kind: TransactionKind::Purchase,
            amount: dec!(1000),
            counterparty: "Vanguard Group".to_string(),
            status,
            ledger_tx_hash: format!("0x{id}"),
        }
    }

    #[test]
    fn test_newest_first() {
        let txns = vec![
            txn("a", 20, "1", TransactionStatus::Completed),
            txn("b", 25, "1", TransactionStatus::Completed),
            txn("c", 22, "2", TransactionStatus::Pending),
        ];
        let out = filter_transactions(&txns, &TransactionQuery::new());
        let ids: Vec<_> = out.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_equal_timestamps_stable() {
        let txns = vec![
            txn("first", 20, "1", TransactionStatus::Completed),
            txn("second", 20, "1", TransactionStatus::Completed),
        ];
        let out = filter_transactions(&txns, &TransactionQuery::new());
        assert_eq!(out[0].id, "first");
    }

    #[test]
    fn test_bond_and_status_filters() {
        let txns = vec![
            txn("a", 20, "1", TransactionStatus::Completed),
            txn("b", 21, "1", TransactionStatus::Failed),
            txn("c", 22, "2", TransactionStatus::Completed),
        ];
        let by_bond = filter_transactions(&txns, &TransactionQuery::new().for_bond("1"));
        assert_eq!(by_bond.len(), 2);

        let query = TransactionQuery::new()
            .for_bond("1")
            .with_status(TransactionStatus::Completed);
        let out = filter_transactions(&txns, &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");

        let none = TransactionQuery::new().with_kind(TransactionKind::Maturity);
        assert!(filter_transactions(&txns, &none).is_empty());
    }
}
