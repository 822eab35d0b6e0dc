//! Movement rules deciding whether a step between two cells is legal.

use clap::ValueEnum;
use serde::Serialize;

use crate::grid::Node;
use crate::height::normalize;

/// Decides whether the search may step from `source` to `destination`.
///
/// Implementations must be pure: the answer may depend only on the two nodes.
pub trait MovementRule {
    fn can_move(&self, source: &Node, destination: &Node) -> bool;
}

impl<F> MovementRule for F
where
    F: Fn(&Node, &Node) -> bool,
{
    fn can_move(&self, source: &Node, destination: &Node) -> bool {
        self(source, destination)
    }
}

/// Check whether two nodes are horizontally or vertically next to each other.
pub fn is_adjacent(source: &Node, destination: &Node) -> bool {
    let dx = (destination.x - source.x).abs();
    let dy = (destination.y - source.y).abs();
    dx + dy == 1
}

/// A step may climb at most one unit; dropping any distance is allowed.
pub fn can_move_dropping(source: &Node, destination: &Node) -> bool {
    is_adjacent(source, destination) && normalize(destination.label) <= normalize(source.label) + 1
}

/// A step may drop at most one unit; climbing any distance is allowed.
///
/// The mirror of [`can_move_dropping`], used to walk a route backward from
/// the summit.
pub fn can_move_climbing(source: &Node, destination: &Node) -> bool {
    is_adjacent(source, destination) && normalize(destination.label) + 1 >= normalize(source.label)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropping;

impl MovementRule for Dropping {
    fn can_move(&self, source: &Node, destination: &Node) -> bool {
        can_move_dropping(source, destination)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Climbing;

impl MovementRule for Climbing {
    fn can_move(&self, source: &Node, destination: &Node) -> bool {
        can_move_climbing(source, destination)
    }
}

/// Movement rule picked at runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    #[default]
    Dropping,
    Climbing,
}

impl MovementRule for Rule {
    fn can_move(&self, source: &Node, destination: &Node) -> bool {
        match self {
            Rule::Dropping => Dropping.can_move(source, destination),
            Rule::Climbing => Climbing.can_move(source, destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: char, x: i32, y: i32) -> Node {
        Node::new(label, x, y)
    }

    #[test]
    fn test_is_adjacent() {
        let origin = node('a', 1, 1);

        assert!(is_adjacent(&origin, &node('a', 1, 0)));
        assert!(is_adjacent(&origin, &node('a', 1, 2)));
        assert!(is_adjacent(&origin, &node('a', 0, 1)));
        assert!(is_adjacent(&origin, &node('a', 2, 1)));

        assert!(!is_adjacent(&origin, &origin));
        assert!(!is_adjacent(&origin, &node('a', 2, 2)));
        assert!(!is_adjacent(&origin, &node('a', 0, 0)));
        assert!(!is_adjacent(&origin, &node('a', 3, 1)));
    }

    #[test]
    fn test_dropping_climbs_at_most_one() {
        let source = node('c', 0, 0);

        assert!(can_move_dropping(&source, &node('d', 1, 0)));
        assert!(can_move_dropping(&source, &node('c', 1, 0)));
        assert!(can_move_dropping(&source, &node('a', 1, 0)));
        assert!(!can_move_dropping(&source, &node('e', 1, 0)));
        // Never across a diagonal
        assert!(!can_move_dropping(&source, &node('c', 1, 1)));
    }

    #[test]
    fn test_climbing_drops_at_most_one() {
        let source = node('c', 0, 0);

        assert!(can_move_climbing(&source, &node('b', 0, 1)));
        assert!(can_move_climbing(&source, &node('c', 0, 1)));
        assert!(can_move_climbing(&source, &node('z', 0, 1)));
        assert!(!can_move_climbing(&source, &node('a', 0, 1)));
        assert!(!can_move_climbing(&source, &node('c', 1, 1)));
    }

    #[test]
    fn test_markers_use_normalized_heights() {
        // S is `a`, E is `z`
        assert!(can_move_dropping(&node('S', 0, 0), &node('b', 1, 0)));
        assert!(!can_move_dropping(&node('x', 0, 0), &node('E', 1, 0)));
        assert!(can_move_dropping(&node('y', 0, 0), &node('E', 1, 0)));

        assert!(can_move_climbing(&node('b', 0, 0), &node('S', 1, 0)));
        assert!(!can_move_climbing(&node('E', 0, 0), &node('x', 1, 0)));
        assert!(can_move_climbing(&node('E', 0, 0), &node('y', 1, 0)));
    }

    #[test]
    fn test_climbing_never_underflows_at_the_bottom() {
        assert!(can_move_climbing(&node('a', 0, 0), &node('a', 1, 0)));
        assert!(can_move_climbing(&node('S', 0, 0), &node('a', 1, 0)));
    }

    #[test]
    fn test_rule_dispatch_matches_functions() {
        let pairs = [
            (node('a', 0, 0), node('b', 1, 0)),
            (node('a', 0, 0), node('c', 1, 0)),
            (node('c', 0, 0), node('a', 0, 1)),
            (node('E', 0, 0), node('y', 0, 1)),
        ];

        for (source, destination) in &pairs {
            assert_eq!(
                Rule::Dropping.can_move(source, destination),
                can_move_dropping(source, destination)
            );
            assert_eq!(
                Rule::Climbing.can_move(source, destination),
                can_move_climbing(source, destination)
            );
        }
    }

    #[test]
    fn test_closures_are_rules() {
        let anywhere = |source: &Node, destination: &Node| is_adjacent(source, destination);
        assert!(anywhere.can_move(&node('a', 0, 0), &node('z', 1, 0)));
        assert!(!anywhere.can_move(&node('a', 0, 0), &node('z', 1, 1)));
    }
}
