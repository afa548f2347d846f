//! Reads occupancy grids from comma-separated text such as
//!
//! ```text
//! 0,1,0,0,0,0,
//! 0,1,0,0,0,0,
//! 0,0,0,0,1,0,
//! ```
//!
//! where `0` is an empty cell and any other integer an obstacle. A trailing
//! comma at the end of a row is optional and blank lines are skipped.
use std::fs::File;
use std::io;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::info;

use crate::error::{Error, Result};
use crate::occupancy_grid::{CellStatus, OccupancyGrid};

fn grid_reader<R: io::Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source)
}

/// Parses grid text. Row and column numbers in errors are 1-based.
pub fn parse_grid(text: &str) -> Result<OccupancyGrid> {
    parse_records(grid_reader(text.as_bytes()))
}

/// Records are read as bytes, so a file that is not valid UTF-8 surfaces as
/// [Error::Csv].
fn parse_records<R: io::Read>(mut reader: Reader<R>) -> Result<OccupancyGrid> {
    let mut rows: Vec<Vec<CellStatus>> = Vec::new();
    for (ix, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(ix + 1, |pos| pos.line() as usize);
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = parse_row(&record, line)?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(Error::RaggedRow {
                    row: line,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    OccupancyGrid::from_rows(rows).ok_or(Error::EmptyGrid)
}

fn parse_row(record: &StringRecord, line: usize) -> Result<Vec<CellStatus>> {
    let mut fields = record.iter().collect::<Vec<&str>>();
    if fields.last() == Some(&"") {
        fields.pop();
    }
    fields
        .into_iter()
        .enumerate()
        .map(|(col, token)| match token.parse::<i64>() {
            Ok(0) => Ok(CellStatus::Empty),
            Ok(_) => Ok(CellStatus::Obstacle),
            Err(_) => Err(Error::InvalidToken {
                row: line,
                col: col + 1,
                token: token.to_owned(),
            }),
        })
        .collect()
}

/// Reads and parses a grid file. Failing to open it is an [Error::Io].
pub fn read_grid_file<P: AsRef<Path>>(path: P) -> Result<OccupancyGrid> {
    let path = path.as_ref();
    let grid = parse_records(grid_reader(File::open(path)?))?;
    info!(
        "Loaded {}x{} grid with {} obstacles from {}",
        grid.rows(),
        grid.cols(),
        grid.count(CellStatus::Obstacle),
        path.display()
    );
    Ok(grid)
}
