//! Error types for the Bondtoken library.
//!
//! Every fallible operation in the catalog returns a [`CatalogResult`].
//! Variants carry owned strings so the error stays `Clone` and can be
//! handed across threads or stored next to a query result.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for Bondtoken operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The main error type for Bondtoken operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Error parsing or constructing a date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A bond whose maturity does not fall strictly after its issue date.
    ///
    /// Maturity progress is undefined for such a term.
    #[error(
        "Invalid term{}: maturity {maturity_date} is not after issue {issue_date}",
        term_subject(.bond_id)
    )]
    InvalidTerm {
        /// Identifier of the offending bond, when known.
        bond_id: Option<String>,
        /// Issue date of the bond.
        issue_date: Date,
        /// Maturity date of the bond.
        maturity_date: Date,
    },

    /// A bond record violating one of its field invariants.
    #[error("Invalid bond record '{id}': {reason}")]
    InvalidRecord {
        /// Identifier of the record.
        id: String,
        /// Which invariant was violated.
        reason: String,
    },

    /// An issuance draft field that failed validation.
    #[error("Invalid issuance field '{field}': {reason}")]
    InvalidIssuance {
        /// The field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A string that does not name any variant of a closed enumeration.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant {
        /// Name of the enumeration being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Two records in one catalog share an id.
    #[error("Duplicate bond id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// No bond with the given id exists in the catalog.
    #[error("Unknown bond id: {id}")]
    UnknownBond {
        /// The id that was looked up.
        id: String,
    },

    /// File could not be read.
    #[error("I/O error on {path}: {reason}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying error message.
        reason: String,
    },

    /// File contents could not be decoded.
    #[error("Parse error: {reason}")]
    Parse {
        /// Description of the failure.
        reason: String,
    },

    /// File extension not recognised as a catalog format.
    #[error("Unsupported catalog format: {path} (expected .csv or .json)")]
    UnsupportedFormat {
        /// Path of the file.
        path: String,
    },

    /// An aggregate exceeded the decimal range.
    #[error("Arithmetic overflow computing {quantity}")]
    Overflow {
        /// The aggregate being computed.
        quantity: String,
    },
}

fn term_subject(bond_id: &Option<String>) -> String {
    bond_id
        .as_deref()
        .map(|id| format!(" for bond '{id}'"))
        .unwrap_or_default()
}

impl CatalogError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid term error not yet tied to a bond.
    #[must_use]
    pub fn invalid_term(issue_date: Date, maturity_date: Date) -> Self {
        Self::InvalidTerm {
            bond_id: None,
            issue_date,
            maturity_date,
        }
    }

    /// Attaches a bond id to an invalid term error. Other variants pass through.
    #[must_use]
    pub fn for_bond(self, id: impl Into<String>) -> Self {
        match self {
            Self::InvalidTerm {
                issue_date,
                maturity_date,
                ..
            } => Self::InvalidTerm {
                bond_id: Some(id.into()),
                issue_date,
                maturity_date,
            },
            other => other,
        }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid issuance error.
    #[must_use]
    pub fn invalid_issuance(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIssuance {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown variant error.
    #[must_use]
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Creates an unknown bond error.
    #[must_use]
    pub fn unknown_bond(id: impl Into<String>) -> Self {
        Self::UnknownBond { id: id.into() }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn overflow(quantity: impl Into<String>) -> Self {
        Self::Overflow {
            quantity: quantity.into(),
        }
    }

    /// Returns true if this error reports a violated term invariant.
    #[must_use]
    pub fn is_invalid_term(&self) -> bool {
        matches!(self, Self::InvalidTerm { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_invalid_term_display() {
        let d = Date::from_ymd(2025, 1, 1).unwrap();
        let err = CatalogError::invalid_term(d, d);
        assert!(err.is_invalid_term());
        assert_eq!(
            err.to_string(),
            "Invalid term: maturity 2025-01-01 is not after issue 2025-01-01"
        );

        let err = err.for_bond("GS-2032");
        assert!(err.to_string().starts_with("Invalid term for bond 'GS-2032'"));
    }

    #[test]
    fn test_overflow_display() {
        let err = CatalogError::overflow("total par value");
        assert_eq!(err.to_string(), "Arithmetic overflow computing total par value");
    }

    #[test]
    fn test_unknown_variant() {
        let err = CatalogError::unknown_variant("transaction status", "Settled");
        assert_eq!(err.to_string(), "Unknown transaction status: 'Settled'");
        assert!(!err.is_invalid_term());
    }
}
