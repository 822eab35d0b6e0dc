//! Breadth-first shortest-path search over a [`Grid`].
//!
//! Every step costs the same, so the first time a goal cell leaves the FIFO
//! frontier it has been reached by a shortest path. The visited set is only
//! consulted when a record is dequeued: the same cell may sit in the frontier
//! several times, and later copies are discarded unexpanded.
//!
//! Path records live in a [`PathTree`] arena and point at their parent by
//! index, so many records can share one parent without reference counting.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::grid::{Grid, Node};
use crate::height::{END_MARKER, START_MARKER};
use crate::movement::{MovementRule, Rule};

/// Index of a [`PathRecord`] inside its [`PathTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(usize);

/// A node reached during the search, linked back to the record it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRecord {
    pub node: Node,
    /// `None` only for the start of the search
    pub parent: Option<RecordId>,
}

/// Arena of path records forming a tree rooted at the start node.
#[derive(Debug, Clone, Default)]
pub struct PathTree {
    records: Vec<PathRecord>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its id.
    pub fn push(&mut self, node: Node, parent: Option<RecordId>) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(PathRecord { node, parent });
        id
    }

    pub fn get(&self, id: RecordId) -> Option<&PathRecord> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Walk parent links from `id` back to the root and return the nodes in
    /// root-to-`id` order.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this tree.
    pub fn reconstruct(&self, id: RecordId) -> Vec<Node> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let record = &self.records[current.0];
            path.push(record.node);
            cursor = record.parent;
        }
        path.reverse();
        path
    }
}

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Nodes marked visited and expanded
    pub expanded: usize,
    /// Records pushed onto the frontier, the start record included
    pub enqueued: usize,
    /// Records dropped because their node was already visited
    pub discarded: usize,
    /// Largest frontier length observed
    pub peak_frontier: usize,
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start node first, goal node last.
    pub path: Vec<Node>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A start label, a goal label and the rule used to move between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    pub start: char,
    pub goal: char,
    pub rule: Rule,
}

impl SearchConfig {
    /// From the start marker up to the summit, climbing one unit at a time.
    pub fn ascent() -> Self {
        Self {
            start: START_MARKER,
            goal: END_MARKER,
            rule: Rule::Dropping,
        }
    }

    /// From the summit down to the nearest `a` cell.
    ///
    /// Walking backward with [`Rule::Climbing`] finds the lowest cell whose
    /// forward ascent to the summit is shortest.
    pub fn trailhead() -> Self {
        Self {
            start: END_MARKER,
            goal: 'a',
            rule: Rule::Climbing,
        }
    }

    pub fn run(&self, grid: &Grid) -> Result<SearchOutcome, SearchError> {
        find_path(grid, self.start, self.goal, &self.rule)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::ascent()
    }
}

/// Find a shortest path from the first `start` cell to any `goal` cell.
///
/// The start is the first node in row-major order labeled `start`. The path
/// includes both endpoints.
pub fn shortest_path<R>(
    grid: &Grid,
    start: char,
    goal: char,
    rule: &R,
) -> Result<Vec<Node>, SearchError>
where
    R: MovementRule + ?Sized,
{
    find_path(grid, start, goal, rule).map(|outcome| outcome.path)
}

/// Same as [`shortest_path`], also reporting search counters.
pub fn find_path<R>(
    grid: &Grid,
    start: char,
    goal: char,
    rule: &R,
) -> Result<SearchOutcome, SearchError>
where
    R: MovementRule + ?Sized,
{
    let start_node = *grid
        .find_first(start)
        .ok_or(SearchError::StartNotFound { label: start })?;
    debug!(start = ?start_node, goal = %goal, "starting search");

    let mut stats = SearchStats::default();
    let mut tree = PathTree::new();
    let mut visited: HashSet<Node> = HashSet::new();
    let mut frontier: VecDeque<RecordId> = VecDeque::new();

    frontier.push_back(tree.push(start_node, None));
    stats.enqueued = 1;
    stats.peak_frontier = 1;

    while let Some(id) = frontier.pop_front() {
        let current = tree.records[id.0].node;

        if current.label == goal {
            let path = tree.reconstruct(id);
            debug!(steps = path.len() - 1, ?stats, "path found");
            return Ok(SearchOutcome { path, stats });
        }

        if !visited.insert(current) {
            stats.discarded += 1;
            continue;
        }
        stats.expanded += 1;
        trace!(node = ?current, frontier = frontier.len(), "expanding");

        for candidate in grid.neighbors(&current) {
            if candidate != current && rule.can_move(&current, &candidate) {
                frontier.push_back(tree.push(candidate, Some(id)));
                stats.enqueued += 1;
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    debug!(?stats, "frontier exhausted");
    Err(SearchError::PathNotFound { start, goal, stats })
}
