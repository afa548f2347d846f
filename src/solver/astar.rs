use grid_util::point::Point;
use log::{debug, info, warn};

use crate::error::{Endpoint, Error, Result};
use crate::heuristic::manhattan;
use crate::occupancy_grid::{CellStatus, OccupancyGrid};
use crate::open_set::{Node, OpenSet, TieBreak};
use crate::solver::{expand_neighbours, SearchOutcome, SearchStats, Solution};

/// A* over a 4-connected grid with unit step cost and the Manhattan heuristic.
///
/// Cells are closed when they are queued rather than when they are expanded,
/// so the first route found to any cell is the one kept. With the default
/// [TieBreak::DeepestFirst] that route can be longer than the shortest one
/// once obstacles are involved; use [TieBreak::ShallowestFirst] when the
/// reported cost has to be minimal.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub tie_break: TieBreak,
    /// Compare connected components before searching and give up immediately
    /// if start and goal are disconnected, instead of flooding the grid.
    pub reachability_check: bool,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> AstarSolver {
        self.tie_break = tie_break;
        self
    }

    pub fn with_reachability_check(mut self, enabled: bool) -> AstarSolver {
        self.reachability_check = enabled;
        self
    }

    /// Searches from `start` to `goal`, consuming the grid.
    ///
    /// Invalid endpoints are rejected before any work is done. Exhausting the
    /// frontier is reported as [SearchOutcome::NoPathFound]. Whether the cost
    /// of a found route is minimal depends on [AstarSolver::tie_break].
    pub fn search(
        &self,
        mut grid: OccupancyGrid,
        start: Point,
        goal: Point,
    ) -> Result<SearchOutcome> {
        validate_endpoints(&grid, start, goal)?;
        if self.reachability_check && !grid.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(SearchOutcome::NoPathFound(SearchStats::default()));
        }
        info!(
            "Searching {}x{} grid from {} to {}",
            grid.rows(),
            grid.cols(),
            start,
            goal
        );

        let mut open = OpenSet::with_tie_break(self.tie_break);
        let mut stats = SearchStats {
            insertions: vec![start],
            ..SearchStats::default()
        };
        open.insert(Node::new(start, 0, manhattan(&start, &goal)));
        grid.set_status_point(start, CellStatus::Closed);

        while let Some(current) = open.extract_best() {
            if current.point == goal {
                grid.set_status_point(start, CellStatus::Start);
                grid.set_status_point(goal, CellStatus::Finish);
                stats.inserted = open.total_inserted();
                info!(
                    "Reached {} in {} steps after expanding {} nodes",
                    goal, current.g, stats.expanded
                );
                return Ok(SearchOutcome::Found(Solution {
                    grid,
                    cost: current.g,
                    stats,
                }));
            }
            grid.set_status_point(current.point, CellStatus::OnPath);
            let queued = expand_neighbours(&current, &goal, &mut open, &mut grid);
            stats.expanded += 1;
            debug!(
                "Expanded {} (g = {}, h = {}), queued {} of its neighbours",
                current.point,
                current.g,
                current.h,
                queued.len()
            );
            stats.insertions.extend_from_slice(&queued);
        }

        stats.inserted = open.total_inserted();
        warn!(
            "Open set exhausted after expanding {} nodes, no path from {} to {}",
            stats.expanded, start, goal
        );
        Ok(SearchOutcome::NoPathFound(stats))
    }
}

/// Both endpoints must be distinct empty cells on the grid.
pub fn validate_endpoints(grid: &OccupancyGrid, start: Point, goal: Point) -> Result<()> {
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.point_in_bounds(point) {
            return Err(Error::OutOfBounds {
                endpoint,
                point,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if grid.status_point(point) != CellStatus::Empty {
            return Err(Error::Blocked { endpoint, point });
        }
    }
    if start == goal {
        return Err(Error::SameEndpoints(start));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled_grid() -> OccupancyGrid {
        // |..#..|
        // |..#..|
        // |..#..|
        let mut grid = OccupancyGrid::new(3, 5);
        for x in 0..3 {
            grid.set_status(x, 2, CellStatus::Obstacle);
        }
        grid
    }

    /// Asserts that the optimal 4 step solution is found.
    #[test]
    fn solve_simple_problem() {
        let grid = OccupancyGrid::new(3, 3);
        let solution = AstarSolver::new()
            .search(grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .solution()
            .unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.path_length(), 5);
        assert_eq!(solution.grid.status(0, 0), CellStatus::Start);
        assert_eq!(solution.grid.status(2, 2), CellStatus::Finish);
        for (x, y) in [(1, 0), (2, 0), (2, 1)] {
            assert_eq!(solution.grid.status(x, y), CellStatus::OnPath);
        }
        assert_eq!(solution.grid.status(1, 1), CellStatus::Closed);
    }

    #[test]
    fn shallowest_first_marks_every_minimal_cell() {
        let solution = AstarSolver::new()
            .with_tie_break(TieBreak::ShallowestFirst)
            .search(OccupancyGrid::new(3, 3), Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .solution()
            .unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.path_length(), 9);
    }

    #[test]
    fn solve_around_centre_obstacle() {
        let mut grid = OccupancyGrid::new(3, 3);
        grid.set_status(1, 1, CellStatus::Obstacle);
        let solution = AstarSolver::new()
            .search(grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .solution()
            .unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.grid.status(1, 1), CellStatus::Obstacle);
    }

    /// The route leads away from the goal before bending back around a U.
    #[test]
    fn detours_around_u_shaped_obstacle() {
        // |.......|
        // |.#.S.#.|
        // |.#...#.|
        // |.#####.|
        // |....G..|
        let mut grid = OccupancyGrid::new(5, 7);
        for x in 1..4 {
            grid.set_status(x, 1, CellStatus::Obstacle);
            grid.set_status(x, 5, CellStatus::Obstacle);
        }
        for y in 2..5 {
            grid.set_status(3, y, CellStatus::Obstacle);
        }
        for tie_break in [TieBreak::DeepestFirst, TieBreak::ShallowestFirst] {
            let solution = AstarSolver::new()
                .with_tie_break(tie_break)
                .search(grid.clone(), Point::new(1, 3), Point::new(4, 4))
                .unwrap()
                .solution()
                .unwrap();
            assert_eq!(solution.cost, 10);
            for (x, y) in [(0, 3), (0, 6), (3, 6), (4, 5)] {
                assert_eq!(solution.grid.status(x, y), CellStatus::OnPath);
            }
            // The longer way round on the left is never taken.
            for (x, y) in [(3, 0), (4, 0), (4, 3)] {
                assert_ne!(solution.grid.status(x, y), CellStatus::OnPath);
            }
        }
    }

    /// A cell first reached from a deeper node keeps that longer cost.
    #[test]
    fn deepest_first_can_report_a_longer_route() {
        // |S..###|
        // |#.....|
        // |....#.|
        // |.#..#.|
        // |#.##..|
        // |..##.G|
        let rows = ["...###", "#.....", "....#.", ".#..#.", "#.##..", "..##.."];
        let mut grid = OccupancyGrid::new(6, 6);
        for (x, row) in rows.iter().enumerate() {
            for (y, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.set_status(x as i32, y as i32, CellStatus::Obstacle);
                }
            }
        }
        let (start, goal) = (Point::new(0, 0), Point::new(5, 5));
        let deepest = AstarSolver::new()
            .search(grid.clone(), start, goal)
            .unwrap()
            .solution()
            .unwrap();
        let shallowest = AstarSolver::new()
            .with_tie_break(TieBreak::ShallowestFirst)
            .search(grid, start, goal)
            .unwrap()
            .solution()
            .unwrap();
        assert_eq!(shallowest.cost, 10);
        assert_eq!(deepest.cost, 12);
        assert_eq!(deepest.grid, shallowest.grid);
    }

    #[test]
    fn wall_exhausts_open_set() {
        let outcome = AstarSolver::new()
            .search(walled_grid(), Point::new(0, 0), Point::new(2, 4))
            .unwrap();
        assert!(!outcome.is_found());
        // Every cell left of the wall is expanded before giving up.
        assert_eq!(outcome.stats().expanded, 6);
        assert_eq!(outcome.stats().inserted, 6);
        assert_eq!(outcome.stats().insertions().len(), 6);
        assert!(outcome
            .stats()
            .insertions()
            .iter()
            .all(|p| p.y < 2));
    }

    #[test]
    fn reachability_check_skips_the_flood() {
        let outcome = AstarSolver::new()
            .with_reachability_check(true)
            .search(walled_grid(), Point::new(0, 0), Point::new(2, 4))
            .unwrap();
        assert!(matches!(&outcome, SearchOutcome::NoPathFound(stats) if stats.expanded == 0));
    }

    #[test]
    fn reachability_check_does_not_change_solutions() {
        let mut grid = OccupancyGrid::new(4, 4);
        grid.set_status(1, 1, CellStatus::Obstacle);
        grid.set_status(2, 2, CellStatus::Obstacle);
        let (start, goal) = (Point::new(0, 3), Point::new(3, 0));
        let plain = AstarSolver::new()
            .search(grid.clone(), start, goal)
            .unwrap()
            .solution()
            .unwrap();
        let checked = AstarSolver::new()
            .with_reachability_check(true)
            .search(grid, start, goal)
            .unwrap()
            .solution()
            .unwrap();
        assert_eq!(plain.grid, checked.grid);
        assert_eq!(plain.cost, checked.cost);
    }

    #[test]
    fn rejects_invalid_endpoints() {
        let grid = walled_grid();
        let cases = [
            (Point::new(-1, 0), Point::new(0, 0)),
            (Point::new(0, 0), Point::new(3, 0)),
            (Point::new(0, 0), Point::new(0, 5)),
            (Point::new(0, 2), Point::new(0, 0)),
            (Point::new(0, 0), Point::new(1, 2)),
            (Point::new(1, 1), Point::new(1, 1)),
        ];
        for (start, goal) in cases {
            let err = AstarSolver::new()
                .search(grid.clone(), start, goal)
                .unwrap_err();
            assert!(err.is_invalid_input(), "{start} -> {goal}: {err}");
        }
    }

    #[test]
    fn rejects_annotated_endpoint() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.set_status(1, 1, CellStatus::Closed);
        let err = validate_endpoints(&grid, Point::new(0, 0), Point::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::Blocked {
                endpoint: Endpoint::Goal,
                ..
            }
        ));
    }

    #[test]
    fn start_is_inserted_first() {
        let solution = AstarSolver::new()
            .search(OccupancyGrid::new(1, 3), Point::new(0, 0), Point::new(0, 2))
            .unwrap()
            .solution()
            .unwrap();
        assert_eq!(
            solution.insertions(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(solution.stats.inserted, 3);
        assert_eq!(solution.stats.expanded, 2);
    }
}
