use clap::Parser;
use env_logger::Env;
use grid_route_planner::{
    read_grid_file, render, AstarSolver, GlyphStyle, OccupancyGrid, SearchOutcome, TieBreak,
};
use grid_util::point::Point;
use log::error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

// Finds the shortest route between two empty cells of a grid file such as
// demos/grid_files/sample.csv:
//
//   0,1,0,0,0,0,
//   0,1,0,0,0,0,
//   0,1,0,0,0,0,
//   0,1,0,0,0,0,
//   0,0,0,0,1,0,
//
// where 1 marks an obstacle. Row and column indices start at 0, so the
// top-left cell is "0 0". Endpoints not given on the command line are asked
// for interactively.
//
//   cargo run --example route_planner -- demos/grid_files/sample.csv --start 0 0 --goal 4 5

#[derive(Parser, Debug)]
#[command(about = "Find the shortest route across an occupancy grid with A*")]
struct Args {
    /// Comma-separated grid file, 0 for empty cells and 1 for obstacles
    grid: PathBuf,

    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    start: Option<Vec<i32>>,

    #[arg(long, num_args = 2, value_names = ["ROW", "COL"], allow_negative_numbers = true)]
    goal: Option<Vec<i32>>,

    /// Draw the board with one ASCII character per cell
    #[arg(long)]
    ascii: bool,

    /// Break ties towards deeper nodes. Draws a single route on open boards
    /// but can report a longer route than necessary around obstacles
    #[arg(long)]
    deepest_first: bool,
}

fn to_point(values: &[i32]) -> Point {
    Point::new(values[0], values[1])
}

/// Reads "ROW COL" lines until one names an empty cell (different from
/// `taken`, if given). Returns [None] when stdin is closed.
fn prompt_cell(
    label: &str,
    grid: &OccupancyGrid,
    taken: Option<Point>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<Point> {
    loop {
        println!("Enter {label} cell row and column values in grid separated by a space");
        io::stdout().flush().ok()?;
        let line = lines.next()?.ok()?;
        let values = line
            .split_whitespace()
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>();
        match values.as_deref() {
            Ok([x, y]) if grid.is_open(*x, *y) && taken != Some(Point::new(*x, *y)) => {
                return Some(Point::new(*x, *y))
            }
            _ => println!("Invalid Input!!"),
        }
    }
}

fn print_rules(grid: &OccupancyGrid) {
    println!();
    println!("Rules to choose your own starting and finishing cell positions in the grid");
    println!("1. Row and column index values start from 0");
    println!(
        "   Meaning top left cell position is \"0 0\" and bottom right cell position is \"{} {}\"",
        grid.rows() - 1,
        grid.cols() - 1
    );
    println!("2. Chosen cell position must be on the grid");
    println!("3. Only an empty cell (represented as 0 in grid) can be chosen");
    println!("4. Starting and finishing cell cannot be same");
    println!();
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let style = if args.ascii {
        GlyphStyle::Ascii
    } else {
        GlyphStyle::Emoji
    };

    let grid = match read_grid_file(&args.grid) {
        Ok(grid) => grid,
        Err(e) => {
            error!("Invalid file path or grid file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Valid grid board! Printing the grid");
    print!("{}", render(&grid, style));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    if args.start.is_none() || args.goal.is_none() {
        print_rules(&grid);
    }
    let start = match args.start.as_deref() {
        Some(values) => Some(to_point(values)),
        None => prompt_cell("starting", &grid, None, &mut lines),
    };
    let goal = match args.goal.as_deref() {
        Some(values) => Some(to_point(values)),
        None => prompt_cell("finishing", &grid, start, &mut lines),
    };
    let (Some(start), Some(goal)) = (start, goal) else {
        error!("No start or goal given");
        return ExitCode::FAILURE;
    };

    let tie_break = if args.deepest_first {
        TieBreak::DeepestFirst
    } else {
        TieBreak::ShallowestFirst
    };
    match AstarSolver::new().with_tie_break(tie_break).search(grid, start, goal) {
        Ok(SearchOutcome::Found(solution)) => {
            println!(
                "Path of {} steps found. Printing solution grid",
                solution.cost
            );
            println!();
            print!("{}", render(&solution.grid, style));
            ExitCode::SUCCESS
        }
        Ok(SearchOutcome::NoPathFound(_)) => {
            println!("No path found");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("Invalid setup: {}", e);
            ExitCode::FAILURE
        }
    }
}
