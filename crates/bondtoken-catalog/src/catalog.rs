//! The read-only bond record store.

use std::collections::HashSet;
use std::sync::Arc;

use bondtoken_core::{BondRecord, CatalogError, CatalogResult};

use crate::predicate;
use crate::query::QuerySpec;
use crate::ranking;

/// An immutable, validated collection of bond records.
///
/// Cloning is cheap: clones share the same record slice. There is no write
/// path; build a new catalog to change its contents.
///
/// # Examples
///
/// ```
/// use bondtoken_catalog::{BondCatalog, QuerySpec};
///
/// let catalog = BondCatalog::new(Vec::new()).unwrap();
/// assert!(catalog.search(&QuerySpec::new()).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BondCatalog {
    records: Arc<[BondRecord]>,
}

impl BondCatalog {
    /// Creates a catalog after validating every record.
    ///
    /// # Errors
    ///
    /// Returns the first record validation error, or
    /// `CatalogError::DuplicateId` if two records share an id.
    pub fn new(records: Vec<BondRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.to_string(),
                });
            }
        }
        tracing::debug!(records = records.len(), "bond catalog built");
        Ok(Self {
            records: records.into(),
        })
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[BondRecord] {
        &self.records
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BondRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BondRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Looks up a record by id, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownBond` if no record has this id.
    pub fn require(&self, id: &str) -> CatalogResult<&BondRecord> {
        self.get(id).ok_or_else(|| CatalogError::unknown_bond(id))
    }

    /// Iterates over the records matching `query`, in insertion order.
    pub fn filter<'a>(&'a self, query: &'a QuerySpec) -> impl Iterator<Item = &'a BondRecord> + 'a {
        self.records.iter().filter(move |r| predicate::matches(r, query))
    }

    /// Returns the records matching `query`, ordered by its sort key.
    #[must_use]
    pub fn search(&self, query: &QuerySpec) -> Vec<&BondRecord> {
        let matching = self.records.iter().filter(|r| predicate::matches(r, query));
        ranking::rank(matching, query.sort)
    }
}

impl<'a> IntoIterator for &'a BondCatalog {
    type Item = &'a BondRecord;
    type IntoIter = std::slice::Iter<'a, BondRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
