//! Error types for grid loading and search setup.
//!
//! Running out of frontier nodes is not an error: it is reported as
//! [SearchOutcome::NoPathFound](crate::solver::SearchOutcome::NoPathFound).

use core::fmt;
use grid_util::point::Point;
use thiserror::Error;

/// Which end of the route a [Point] was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{endpoint} {point} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        rows: usize,
        cols: usize,
    },

    #[error("{endpoint} {point} is not an empty cell")]
    Blocked { endpoint: Endpoint, point: Point },

    #[error("start and goal are both {0}")]
    SameEndpoints(Point),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("grid contains no rows")]
    EmptyGrid,

    #[error("row {row}, column {col}: cannot parse {token:?} as a cell")]
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Start or goal cannot be searched from/to on the given grid.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds { .. } | Error::Blocked { .. } | Error::SameEndpoints(_)
        )
    }

    /// The grid text could not be turned into a rectangular occupancy grid.
    pub fn is_malformed_grid(&self) -> bool {
        !self.is_invalid_input()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
