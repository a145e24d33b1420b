//! Text and category filtering over catalog records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::record::{Category, ToolRecord};

/// Category selector. `All` is the sentinel that disables the category
/// predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector chips in display order: `All` followed by every category.
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(cat) => cat.label(),
        }
    }

    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => cat == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_label(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| Error::UnknownCategory {
                value: s.to_string(),
                valid: Category::ALL
                    .iter()
                    .map(|c| c.label().to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Active filter criteria.
///
/// The default (empty query, `All`) matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub query: String,
    pub category: CategoryFilter,
}

impl Filter {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Restore the default criteria.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    /// True if `record` satisfies both predicates.
    pub fn matches(&self, record: &ToolRecord) -> bool {
        self.matches_needle(record, &self.query.to_lowercase())
    }

    /// Ordered subsequence of `records` satisfying both predicates.
    pub fn apply<'a>(&self, records: &'a [ToolRecord]) -> FilterResult<'a> {
        let needle = self.query.to_lowercase();
        let matches = records
            .iter()
            .filter(|r| self.matches_needle(r, &needle))
            .collect();
        FilterResult {
            matches,
            total: records.len(),
        }
    }

    /// `needle` is the already-lowercased query.
    fn matches_needle(&self, record: &ToolRecord, needle: &str) -> bool {
        self.category.accepts(record.category) && record.matches_lowercase(needle)
    }
}

/// Outcome of applying a [`Filter`].
///
/// An empty result is a valid outcome of filtering; callers present it as
/// the "no tools found" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult<'a> {
    matches: Vec<&'a ToolRecord>,
    total: usize,
}

impl<'a> FilterResult<'a> {
    pub fn matches(&self) -> &[&'a ToolRecord] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Size of the list the matches were drawn from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.matches.iter().map(|r| r.id.as_str()).collect()
    }

    /// Clone the matches into an owned list, e.g. to filter them again.
    pub fn to_records(&self) -> Vec<ToolRecord> {
        self.matches.iter().map(|r| (*r).clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ToolRecord> + '_ {
        self.matches.iter().copied()
    }
}
