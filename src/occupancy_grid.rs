use crate::render::{render, GlyphStyle};
use crate::solver::DIRECTIONS;
use core::fmt;
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;

/// Status of a single cell. Only [Empty](CellStatus::Empty) and
/// [Obstacle](CellStatus::Obstacle) come out of the loader; the others are
/// annotations laid over empty cells by a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Obstacle,
    /// Queued for expansion at some point; never queued again.
    Closed,
    /// Extracted from the open set without being the goal.
    OnPath,
    Start,
    Finish,
}

/// A rectangular, row-major occupancy grid. Points address cells as
/// `x` = row and `y` = column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellStatus>,
}

impl OccupancyGrid {
    /// An obstacle-free grid. Both dimensions must be at least one.
    pub fn new(rows: usize, cols: usize) -> OccupancyGrid {
        assert!(rows >= 1 && cols >= 1, "grid must have at least one cell");
        OccupancyGrid {
            rows,
            cols,
            cells: vec![CellStatus::Empty; rows * cols],
        }
    }

    /// Builds a grid from rows of equal, non-zero length. Returns [None] for
    /// empty or ragged input; the loader reports those cases in more detail.
    pub fn from_rows(rows: Vec<Vec<CellStatus>>) -> Option<OccupancyGrid> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(OccupancyGrid {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.rows && (y as usize) < self.cols
    }
    pub fn point_in_bounds(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    /// The sole admission test for the frontier: on the grid and still
    /// [Empty](CellStatus::Empty).
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.ix(x, y)] == CellStatus::Empty
    }
    pub fn is_open_point(&self, p: Point) -> bool {
        self.is_open(p.x, p.y)
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn status(&self, x: i32, y: i32) -> CellStatus {
        self.cells[self.ix(x, y)]
    }
    pub fn status_point(&self, p: Point) -> CellStatus {
        self.status(p.x, p.y)
    }

    /// Overwrites a cell without any validation. Panics if `(x, y)` is
    /// outside the grid.
    pub fn set_status(&mut self, x: i32, y: i32, status: CellStatus) {
        let ix = self.ix(x, y);
        self.cells[ix] = status;
    }
    pub fn set_status_point(&mut self, p: Point, status: CellStatus) {
        self.set_status(p.x, p.y, status)
    }

    /// Number of cells currently carrying `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&c| c == status).count()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellStatus)> + '_ {
        self.cells.iter().enumerate().map(move |(ix, &status)| {
            let p = Point::new((ix / self.cols) as i32, (ix % self.cols) as i32);
            (p, status)
        })
    }

    /// Copy of the grid with every search annotation reset to empty, keeping
    /// only the obstacles.
    pub fn cleared(&self) -> OccupancyGrid {
        OccupancyGrid {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .map(|&c| match c {
                    CellStatus::Obstacle => CellStatus::Obstacle,
                    _ => CellStatus::Empty,
                })
                .collect(),
        }
    }

    /// Groups all non-obstacle cells into 4-connected components.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for (p, status) in self.cells() {
            if status == CellStatus::Obstacle {
                continue;
            }
            let parent_ix = self.ix(p.x, p.y);
            // Linking down and right is enough to cover every edge once.
            for (dx, dy) in [(1, 0), (0, 1)] {
                let (nx, ny) = (p.x + dx, p.y + dy);
                if self.in_bounds(nx, ny) && self.status(nx, ny) != CellStatus::Obstacle {
                    components.union(parent_ix, self.ix(nx, ny));
                }
            }
        }
        components
    }

    /// Checks if start and goal are on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.point_in_bounds(*start) || !self.point_in_bounds(*goal) {
            return false;
        }
        self.components()
            .equiv(self.ix(start.x, start.y), self.ix(goal.x, goal.y))
    }

    /// Open neighbours of `p` in [DIRECTIONS] order.
    pub(crate) fn open_neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| Point::new(p.x + dx, p.y + dy))
            .filter(move |n| self.is_open_point(*n))
    }

    fn ix(&self, x: i32, y: i32) -> usize {
        assert!(self.in_bounds(x, y), "({x}, {y}) is off the grid");
        x as usize * self.cols + y as usize
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render(self, GlyphStyle::Ascii))
    }
}
