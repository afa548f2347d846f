//! # grid_route_planner
//!
//! Route planning on a 2-D occupancy grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is
//! 4-directional with unit step cost and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) is used
//! as heuristic.
//!
//! A search takes the grid by value and hands it back annotated: the cells it
//! queued are [Closed](CellStatus::Closed), the cells it expanded are
//! [OnPath](CellStatus::OnPath) and the endpoints are marked
//! [Start](CellStatus::Start) and [Finish](CellStatus::Finish). The grid
//! statuses double as the visited set, so every cell enters the open set at
//! most once. Because of that, the reported cost is only guaranteed to be
//! minimal with [TieBreak::ShallowestFirst]; the default
//! [TieBreak::DeepestFirst] can settle for a longer route around obstacles.
//!
//! ```
//! use grid_route_planner::{parse_grid, search, GlyphStyle, render};
//! use grid_util::point::Point;
//!
//! let grid = parse_grid("0,0,0,\n0,1,0,\n0,0,0,\n").unwrap();
//! let solution = search(grid, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap()
//!     .solution()
//!     .unwrap();
//! assert_eq!(solution.cost, 4);
//! println!("{}", render(&solution.grid, GlyphStyle::Ascii));
//! ```
pub mod error;
pub mod heuristic;
pub mod loader;
pub mod occupancy_grid;
pub mod open_set;
pub mod render;
pub mod solver;

pub use error::{Endpoint, Error, Result};
pub use loader::{parse_grid, read_grid_file};
pub use occupancy_grid::{CellStatus, OccupancyGrid};
pub use open_set::TieBreak;
pub use render::{render, GlyphStyle};
pub use solver::astar::{validate_endpoints, AstarSolver};
pub use solver::{SearchOutcome, SearchStats, Solution};

use grid_util::point::Point;

/// Runs [AstarSolver] with its default settings, i.e. [TieBreak::DeepestFirst].
/// The returned [Solution::cost] can then exceed the shortest route when
/// obstacles are in the way.
pub fn search(grid: OccupancyGrid, start: Point, goal: Point) -> Result<SearchOutcome> {
    AstarSolver::new().search(grid, start, goal)
}
