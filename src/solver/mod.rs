use crate::heuristic::manhattan;
use crate::occupancy_grid::{CellStatus, OccupancyGrid};
use crate::open_set::{Node, OpenSet};
use grid_util::point::Point;
use smallvec::SmallVec;

pub mod astar;

/// Axis-aligned moves in expansion order: up, left, down, right.
/// The order only decides between equally short routes.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Counters collected over one search, whether or not it reached the goal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken out of the open set and expanded (the goal is not counted).
    pub expanded: usize,
    /// Nodes put into the open set, including the start.
    pub inserted: usize,
    insertions: Vec<Point>,
}

impl SearchStats {
    /// Every point placed in the open set, in insertion order.
    pub fn insertions(&self) -> &[Point] {
        &self.insertions
    }
}

/// A solved search: the annotated grid and how it was obtained.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Input grid with [Start](CellStatus::Start), [Finish](CellStatus::Finish),
    /// [OnPath](CellStatus::OnPath) and [Closed](CellStatus::Closed) marks.
    pub grid: OccupancyGrid,
    /// Number of steps along the route that was found. Minimal with
    /// [TieBreak::ShallowestFirst](crate::open_set::TieBreak::ShallowestFirst);
    /// the default [TieBreak::DeepestFirst](crate::open_set::TieBreak::DeepestFirst)
    /// can exceed the minimum when obstacles are in the way.
    pub cost: i32,
    pub stats: SearchStats,
}

impl Solution {
    /// Cells marked as part of the route, start and finish included.
    pub fn path_length(&self) -> usize {
        self.grid.count(CellStatus::OnPath)
            + self.grid.count(CellStatus::Start)
            + self.grid.count(CellStatus::Finish)
    }

    /// Every point placed in the open set, in insertion order.
    pub fn insertions(&self) -> &[Point] {
        self.stats.insertions()
    }
}

/// Result of a search that was allowed to run.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    Found(Solution),
    /// The frontier ran dry before the goal was extracted. No grid is returned.
    NoPathFound(SearchStats),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NoPathFound(_) => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found(solution) => &solution.stats,
            SearchOutcome::NoPathFound(stats) => stats,
        }
    }
}

/// Queues every open neighbour of `current` and closes it on the grid right
/// away, so no cell can be queued a second time. Returns the queued points.
pub fn expand_neighbours(
    current: &Node,
    goal: &Point,
    open: &mut OpenSet,
    grid: &mut OccupancyGrid,
) -> SmallVec<[Point; 4]> {
    let successors = grid
        .open_neighbours(current.point)
        .collect::<SmallVec<[Point; 4]>>();
    for &p in &successors {
        open.insert(Node::new(p, current.g + 1, manhattan(&p, goal)));
        grid.set_status_point(p, CellStatus::Closed);
    }
    successors
}
