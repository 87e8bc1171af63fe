//! Downstream crates import the domain types from the crate root.

use bondtoken_core::{
    BondId, ContractStatus, ContractSummary, Date, KycLevel, StatusTone, Transaction,
    TransactionKind, TransactionStatus,
};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

#[test]
fn test_transaction_types_from_root() {
    let txn = Transaction {
        id: "tx-001-7f3a9c2b".to_string(),
        timestamp: Utc.with_ymd_and_hms(2025, 1, 20, 10, 0, 0).unwrap(),
        bond_id: BondId::new("1"),
        bond_name: "GS Corporate Bond 2032".to_string(),
        kind: TransactionKind::Purchase,
        amount: dec!(10000),
        counterparty: "Vanguard Group".to_string(),
        status: TransactionStatus::Completed,
        ledger_tx_hash: "0x7f3a".to_string(),
    };
    assert_eq!(txn.short_id(), "tx-001-7");
    assert_eq!(txn.status.tone(), StatusTone::Success);
}

#[test]
fn test_contract_and_kyc_types_from_root() {
    let contract = ContractSummary {
        contract_id: "00c8".to_string(),
        status: ContractStatus::Expired,
        bond_name: "Microsoft Corp 2030".to_string(),
        issue_date: Date::from_ymd(2020, 11, 1).unwrap(),
        participants: vec!["Microsoft Corporation".to_string()],
    };
    assert_eq!(contract.status.tone(), StatusTone::Neutral);
    assert!(!KycLevel::Basic.requirements().is_empty());
}
