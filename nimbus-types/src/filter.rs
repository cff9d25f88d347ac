//! Result pagination, ordering, and projection.

use serde::{Deserialize, Serialize};

/// The direction in which a sorted field is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One (field, direction) pair in a result ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Sorts `field` in ascending order.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Sorts `field` in descending order.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Pagination, ordering, and projection options for a query.
///
/// `start` and `end` are inclusive record indices. An `end` of
/// [`ResultFilter::UNBOUNDED`] returns everything from `start` through the
/// last available record. `fields` names the fields to project into the
/// result set; an empty list returns all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilter {
    pub start: i64,
    pub end: i64,
    pub order_by: Vec<SortOrder>,
    pub fields: Vec<String>,
}

impl ResultFilter {
    /// Sentinel for "through the last available record".
    pub const UNBOUNDED: i64 = -1;

    /// Creates a filter with every option spelled out.
    pub fn new(start: i64, end: i64, order_by: Vec<SortOrder>, fields: Vec<String>) -> Self {
        Self {
            start,
            end,
            order_by,
            fields,
        }
    }

    /// Creates a filter selecting the inclusive index range, with no
    /// ordering and no projection.
    pub fn range(start: i64, end: i64) -> Self {
        Self::new(start, end, Vec::new(), Vec::new())
    }

    /// True if the filter runs through the last available record.
    pub fn is_unbounded(&self) -> bool {
        self.end == Self::UNBOUNDED
    }
}

impl Default for ResultFilter {
    /// Everything: start at the first record, no upper bound, no ordering,
    /// all fields.
    fn default() -> Self {
        Self::range(0, Self::UNBOUNDED)
    }
}
