//! File loading tests against real files on disk.

use std::io::Write;
use std::path::PathBuf;

use bondtoken_catalog::prelude::*;
use bondtoken_catalog::{load_catalog, load_transactions};
use tempfile::TempDir;

const BONDS_CSV: &str = "\
id,name,issuer,category,coupon_rate,current_yield,par_value,token_supply,tokens_available,issue_date,maturity_date,last_traded,available,description,rating
1,GS Corporate Bond 2032,Goldman Sachs Group,Corporate,4.75,4.92,1000000,1000,250,2022-04-15,2032-04-15,2025-01-24T15:42:18Z,true,Senior unsecured,A+
2,US Treasury 10-Year Note,U.S. Department of the Treasury,Treasury,3.875,4.1,500000,500,100,2023-02-15,2033-02-15,2025-01-23T09:22:45Z,true,,AAA
3,Microsoft Corp 2030,Microsoft Corporation,Corporate,3.5,3.62,750000,750,0,2020-11-01,2030-11-01,2025-01-22T11:05:00Z,false,,AAA
";

const BONDS_JSON: &str = r#"[
  {
    "id": "4",
    "name": "California Municipal Bond 2035",
    "issuer": "State of California",
    "category": "Municipal",
    "coupon_rate": 3.25,
    "current_yield": 3.4,
    "par_value": 250000,
    "token_supply": 250,
    "tokens_available": 40,
    "issue_date": "2021-06-30",
    "maturity_date": "2035-06-30",
    "last_traded": "2025-01-20T14:00:00Z",
    "available": true
  }
]"#;

const TXNS_JSON: &str = r#"[
  {
    "id": "tx-001-7f3a9c2b",
    "timestamp": "2025-01-20T10:00:00Z",
    "bond_id": "1",
    "bond_name": "GS Corporate Bond 2032",
    "kind": "Purchase",
    "amount": 10000,
    "counterparty": "Vanguard Group",
    "status": "Completed",
    "ledger_tx_hash": "0x7f3a"
  },
  {
    "id": "tx-002-11aa22bb",
    "timestamp": "2025-01-24T10:00:00Z",
    "bond_id": "1",
    "bond_name": "GS Corporate Bond 2032",
    "kind": "Coupon Payment",
    "amount": 475,
    "counterparty": "Goldman Sachs Group",
    "status": "Pending",
    "ledger_tx_hash": "0x11aa"
  }
]"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_csv_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bonds.csv", BONDS_CSV);
    let catalog = load_catalog(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    let gs = catalog.require("1").unwrap();
    assert_eq!(gs.category, BondCategory::Corporate);
    assert_eq!(gs.tokens_sold(), 750);
    assert!(!catalog.require("3").unwrap().is_tradable());

    let ranked = catalog.search(&QuerySpec::new());
    let ids: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bonds.json", BONDS_JSON);
    let catalog = load_catalog(&path).unwrap();

    assert_eq!(catalog.len(), 1);
    let record = catalog.require("4").unwrap();
    assert_eq!(record.category, BondCategory::Municipal);
    assert!(record.description.is_none());
}

#[test]
fn test_duplicate_ids_rejected() {
    let dir = TempDir::new().unwrap();
    let mut contents = BONDS_CSV.to_string();
    contents.push_str(
        "1,Copy,Someone,Corporate,4.0,4.0,1000,10,10,2022-04-15,2032-04-15,2025-01-24T15:42:18Z,true,,\n",
    );
    let path = write(&dir, "bonds.csv", &contents);
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { .. }), "{err}");
}

#[test]
fn test_inverted_term_rejected() {
    let dir = TempDir::new().unwrap();
    let contents = BONDS_CSV.replace("2032-04-15,2025-01-24", "2021-04-15,2025-01-24");
    let path = write(&dir, "bonds.csv", &contents);
    let err = load_catalog(&path).unwrap_err();
    assert!(err.is_invalid_term());
    assert!(err.to_string().contains("'1'"), "{err}");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bonds.txt", BONDS_CSV);
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
}

#[test]
fn test_load_transactions() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "txns.json", TXNS_JSON);
    let txns = load_transactions(&path).unwrap();

    assert_eq!(txns.len(), 2);
    assert_eq!(txns[1].kind, TransactionKind::CouponPayment);
    assert_eq!(txns[0].short_id(), "tx-001-7");

    let newest = filter_transactions(&txns, &TransactionQuery::new().for_bond("1"));
    assert_eq!(newest[0].id, "tx-002-11aa22bb");

    let pending = filter_transactions(
        &txns,
        &TransactionQuery::new().with_status(TransactionStatus::Pending),
    );
    assert_eq!(pending.len(), 1);
}

#[test]
fn test_unknown_transaction_status_rejected() {
    let dir = TempDir::new().unwrap();
    let contents = TXNS_JSON.replace("\"Pending\"", "\"Settled\"");
    let path = write(&dir, "txns.json", &contents);
    assert!(matches!(load_transactions(&path), Err(CatalogError::Parse { .. })));
}
