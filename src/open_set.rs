//! The frontier of an A* search: a binary heap of [Node]s keyed by `f = g + h`.
//!
//! Ties between equal `f` are broken on `g` according to [TieBreak], and any
//! remaining ties come out in insertion order, so the extraction order is
//! fully determined by the insertion order.
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry. `f` is always derived from `g` and `h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    /// Steps taken from the start.
    pub g: i32,
    /// Heuristic estimate of the steps left to the goal.
    pub h: i32,
}

impl Node {
    pub fn new(point: Point, g: i32, h: i32) -> Node {
        Node { point, g, h }
    }
    pub fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// Which of several nodes with equal `f` is extracted first.
///
/// Because cells are closed when they are queued, the rule also decides
/// whether obstacles can lure the search into keeping a longer route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Highest `g` (lowest `h`) first. Keeps to a single route when nothing is
    /// in the way, so an open grid is marked with exactly one shortest route.
    /// A cell first reached by stepping back from a deeper node keeps that
    /// longer cost, so around obstacles the reported route can be longer than
    /// the shortest one by a multiple of two steps.
    #[default]
    DeepestFirst,
    /// Lowest `g` first. Every cell is queued with its true distance from the
    /// start, so the reported cost is always minimal, at the price of marking
    /// every cell with minimal `f` on the way.
    ShallowestFirst,
}

struct SmallestCostHolder {
    node: Node,
    sequence: usize,
    tie_break: TieBreak,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element, so smaller f must compare greater
        other
            .node
            .f()
            .cmp(&self.node.f())
            .then_with(|| match self.tie_break {
                TieBreak::DeepestFirst => self.node.g.cmp(&other.node.g),
                TieBreak::ShallowestFirst => other.node.g.cmp(&self.node.g),
            })
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Default)]
pub struct OpenSet {
    heap: BinaryHeap<SmallestCostHolder>,
    inserted: usize,
    tie_break: TieBreak,
}

impl OpenSet {
    pub fn new() -> OpenSet {
        OpenSet::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> OpenSet {
        OpenSet {
            tie_break,
            ..OpenSet::default()
        }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn insert(&mut self, node: Node) {
        self.heap.push(SmallestCostHolder {
            node,
            sequence: self.inserted,
            tie_break: self.tie_break,
        });
        self.inserted += 1;
    }

    /// Removes the best node, or returns [None] once the frontier is exhausted.
    pub fn extract_best(&mut self) -> Option<Node> {
        self.heap.pop().map(|holder| holder.node)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of insertions over the lifetime of this set.
    pub fn total_inserted(&self) -> usize {
        self.inserted
    }
}
