//! Entity - Keyed Records and List Capabilities
//!
//! Every table row is identified by a stable key value, never by its
//! position in the list or by reference.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// A record with a stable, unique key field
pub trait Entity {
    /// Key type (`id`, `code`, `vendor_code`, ...)
    type Key: Eq + Hash + Clone + Debug;

    /// Borrowed key of this record
    fn key(&self) -> &Self::Key;
}

/// Records that can be matched against free-text filter input
pub trait Searchable {
    /// Check whether the record matches the filter text.
    ///
    /// The table passes the filter trimmed and lowercased.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Records that can be ordered by a named column
pub trait Sortable {
    /// Compare two records by the given field.
    ///
    /// Unknown fields compare as `Equal` so the sort leaves the order as-is.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Case-insensitive substring check used by the record filters
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
