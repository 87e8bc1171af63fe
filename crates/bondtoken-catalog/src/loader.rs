//! Catalog and transaction file loading.
//!
//! Files are CSV (header row, snake_case column names) or JSON (an array of
//! objects with the same field names). The format is chosen by extension.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use bondtoken_core::{BondRecord, CatalogError, CatalogResult, Transaction};

use crate::catalog::BondCatalog;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array.
    Json,
}

impl FileFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Reads rows of `T` from CSV.
///
/// # Errors
///
/// Returns `CatalogError::Parse` naming the failing row.
pub fn read_csv<T, R>(reader: R) -> CatalogResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.map_err(|e| CatalogError::parse(format!("row {}: {e}", i + 1))))
        .collect()
}

/// Reads a JSON array of `T`.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the document is not an array of `T`.
pub fn read_json<T, R>(reader: R) -> CatalogResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader).map_err(|e| CatalogError::parse(e.to_string()))
}

/// Reads a file of `T` in the format given by its extension.
///
/// # Errors
///
/// Returns `CatalogError::Io`, `CatalogError::Parse` or
/// `CatalogError::UnsupportedFormat`.
pub fn read_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> CatalogResult<Vec<T>> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let file = File::open(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rows = match format {
        FileFormat::Csv => read_csv(file)?,
        FileFormat::Json => read_json(file)?,
    };
    tracing::debug!(path = %path.display(), rows = rows.len(), ?format, "file loaded");
    Ok(rows)
}

/// Loads and validates a bond catalog file.
///
/// # Errors
///
/// Fails on any I/O, parse or record validation error; no record is skipped.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<BondCatalog> {
    let records: Vec<BondRecord> = read_file(path)?;
    BondCatalog::new(records)
}

/// Loads a transaction file.
///
/// # Errors
///
/// Fails on any I/O or parse error, including unknown kinds or statuses.
pub fn load_transactions(path: impl AsRef<Path>) -> CatalogResult<Vec<Transaction>> {
    read_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(FileFormat::from_path(Path::new("a/b.csv")).unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_path(Path::new("B.JSON")).unwrap(), FileFormat::Json);
        assert!(matches!(
            FileFormat::from_path(Path::new("bonds.xlsx")),
            Err(CatalogError::UnsupportedFormat { .. })
        ));
        assert!(FileFormat::from_path(Path::new("bonds")).is_err());
    }

    #[test]
    fn test_read_csv_bonds() {
        let data = "\
id,name,issuer,category,coupon_rate,current_yield,par_value,token_supply,tokens_available,issue_date,maturity_date,last_traded,available,description,rating
1,GS Corporate Bond 2032,Goldman Sachs Group,Corporate,4.75,4.92,1000000,1000,250,2022-04-15,2032-04-15,2025-01-24T15:42:18Z,true,,A+
2,US Treasury 10-Year Note,U.S. Department of the Treasury,Treasury,3.875,4.1,500000,500,0,2023-02-15,2033-02-15,2025-01-23T09:22:45Z,false,Benchmark note,
";
        let records: Vec<BondRecord> = read_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].issuer, "Goldman Sachs Group");
        assert_eq!(records[0].tokens_available, 250);
        assert_eq!(records[0].description, None);
        assert_eq!(records[0].rating.as_deref(), Some("A+"));
        assert!(!records[1].available);
        assert_eq!(records[1].description.as_deref(), Some("Benchmark note"));
    }

    #[test]
    fn test_read_csv_reports_row() {
        let data = "\
id,name,issuer,category,coupon_rate,current_yield,par_value,token_supply,tokens_available,issue_date,maturity_date,last_traded,available
1,A,B,Corporate,4.0,4.0,1000,10,10,2022-04-15,2032-04-15,2025-01-24T15:42:18Z,true
2,C,D,Sovereign,4.0,4.0,1000,10,10,2022-04-15,2032-04-15,2025-01-24T15:42:18Z,true
";
        let err = read_csv::<BondRecord, _>(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"), "{err}");
    }

    #[test]
    fn test_read_json_rejects_non_array() {
        let err = read_json::<BondRecord, _>("{\"id\": 1}".as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
