//! Catalog storage

use std::collections::HashMap;

use crate::builtins::{FEATURED_IDS, builtin_records};
use crate::error::{Error, Result};
use crate::filter::{Filter, FilterResult};
use crate::record::{Category, ToolRecord};

/// Ordered, read-only collection of tool records.
///
/// Records keep their authoring order; lookup by id goes through an index
/// built once at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ToolRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog pre-populated with all built-in records.
    ///
    /// The built-in list is covered by tests for the same invariants that
    /// [`Catalog::from_records`] enforces, so it is indexed directly.
    pub fn with_builtins() -> Self {
        Self::indexed(builtin_records())
    }

    /// Build a catalog from caller-supplied records, validating invariants.
    pub fn from_records(records: Vec<ToolRecord>) -> Result<Self> {
        let mut seen = HashMap::with_capacity(records.len());
        for (index, rec) in records.iter().enumerate() {
            if rec.id.trim().is_empty() {
                return Err(Error::MissingField { index, field: "id" });
            }
            if rec.command.trim().is_empty() {
                return Err(Error::MissingField {
                    index,
                    field: "command",
                });
            }
            if rec.env.as_ref().is_some_and(|env| env.is_empty()) {
                return Err(Error::EmptyEnv { id: rec.id.clone() });
            }
            if seen.insert(rec.id.as_str(), index).is_some() {
                return Err(Error::DuplicateId { id: rec.id.clone() });
            }
        }
        tracing::debug!(count = records.len(), "Catalog validated");
        Ok(Self::indexed(records))
    }

    fn indexed(records: Vec<ToolRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<&ToolRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in authoring order.
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRecord> {
        self.records.iter()
    }

    /// Recommended starters present in this catalog, in featured order.
    pub fn featured(&self) -> Vec<&ToolRecord> {
        FEATURED_IDS.iter().filter_map(|id| self.get(id)).collect()
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .count()
    }

    /// Apply a filter to the whole catalog.
    pub fn filter(&self, filter: &Filter) -> FilterResult<'_> {
        filter.apply(&self.records)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Vendor;

    fn rec(id: &str) -> ToolRecord {
        ToolRecord::new(id, id.to_uppercase(), Category::Other, Vendor::Community)
            .with_command("npx", ["-y", id])
    }

    #[test]
    fn test_from_records_keeps_order() {
        let catalog = Catalog::from_records(vec![rec("b"), rec("a"), rec("c")]).unwrap();
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(catalog.get("a").unwrap().name, "A");
    }

    #[test]
    fn test_from_records_rejects_duplicate() {
        let err = Catalog::from_records(vec![rec("a"), rec("a")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn test_from_records_rejects_empty_env() {
        let mut bad = rec("a");
        bad.env = Some(Default::default());
        let err = Catalog::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, Error::EmptyEnv { .. }));
    }

    #[test]
    fn test_from_records_rejects_missing_command() {
        let bad = ToolRecord::new("a", "A", Category::Other, Vendor::Community);
        let err = Catalog::from_records(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                index: 0,
                field: "command"
            }
        ));
    }

    #[test]
    fn test_featured_skips_missing() {
        let catalog = Catalog::from_records(vec![rec("github"), rec("filesystem")]).unwrap();
        let ids: Vec<_> = catalog.featured().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["filesystem", "github"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
