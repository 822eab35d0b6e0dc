//! Shortest paths over labeled height-map grids.
//!
//! A grid is parsed from rows of single-character cell labels, then searched
//! breadth-first under a pluggable movement rule. The search returns the full
//! node sequence from the start cell to the nearest goal cell.

pub mod error;
pub mod grid;
pub mod height;
pub mod movement;
pub mod search;

// Re-export main types
pub use error::{GridError, SearchError};
pub use grid::{Direction, Grid, Node};
pub use height::{normalize, END_MARKER, START_MARKER};
pub use movement::{can_move_climbing, can_move_dropping, Climbing, Dropping, MovementRule, Rule};
pub use search::{
    find_path, shortest_path, PathRecord, PathTree, RecordId, SearchConfig, SearchOutcome,
    SearchStats,
};
