//! Grid model: labeled cells addressable by coordinates.
//!
//! `x` is the column and grows rightward, `y` is the row and grows downward.
//! `(0, 0)` is the top-left cell.

use std::str::FromStr;

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::GridError;
use crate::height::is_label;

/// A single labeled cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    pub label: char,
    pub x: i32,
    pub y: i32,
}

impl Node {
    pub fn new(label: char, x: i32, y: i32) -> Self {
        Self { label, x, y }
    }
}

/// Step direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which neighbors are handed to the search engine.
    pub const EXPANSION_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Rectangular, read-only collection of nodes stored in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    nodes: Vec<Node>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows of single-character labels.
    ///
    /// Every row must be as wide as the first one, and every character must be
    /// a lowercase letter or one of the start/end markers.
    pub fn parse<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut nodes = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::Malformed {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, label) in row.chars().enumerate() {
                let (x, y) = (x as i32, y as i32);
                if !is_label(label) {
                    return Err(GridError::UnknownLabel { label, x, y });
                }
                nodes.push(Node::new(label, x, y));
            }
            height += 1;
        }

        Ok(Self {
            nodes,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get the node at a position (bounds-checked)
    pub fn get(&self, x: i32, y: i32) -> Option<&Node> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.nodes.get(y * self.width + x)
    }

    /// First node in row-major order carrying `label`.
    pub fn find_first(&self, label: char) -> Option<&Node> {
        self.nodes.iter().find(|node| node.label == label)
    }

    /// In-bounds 4-directional neighbors of `node`, in
    /// [`Direction::EXPANSION_ORDER`].
    pub fn neighbors(&self, node: &Node) -> SmallVec<[Node; 4]> {
        Direction::EXPANSION_ORDER
            .iter()
            .filter_map(|direction| {
                let (dx, dy) = direction.delta();
                self.get(node.x + dx, node.y + dy).copied()
            })
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a block of text, one row per line. Trailing blank lines are
    /// ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Self::parse(rows)
    }
}
