//! Error types for grid parsing and path search.

use thiserror::Error;

use crate::search::SearchStats;

/// Errors raised while turning raw rows into a [`Grid`](crate::grid::Grid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same length as the first row.
    #[error("Row {row} has {found} cells but the grid is {expected} cells wide")]
    Malformed {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A cell holds something other than `a`..`z` or a start/end marker.
    #[error("Unknown cell label {label:?} at ({x}, {y})")]
    UnknownLabel { label: char, x: i32, y: i32 },
}

/// Errors raised by the search engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No cell carries the requested start label.
    #[error("No cell labeled {label:?} to start from")]
    StartNotFound { label: char },

    /// The frontier ran dry before any cell labeled `goal` was reached.
    #[error("No path from {start:?} to {goal:?}")]
    PathNotFound {
        start: char,
        goal: char,
        /// Counters of the exhausted search
        stats: SearchStats,
    },
}
