use crate::occupancy_grid::{CellStatus, OccupancyGrid};

/// How cells are drawn by [render].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Wide, padded emoji board for terminals.
    #[default]
    Emoji,
    /// One character per cell.
    Ascii,
}

impl CellStatus {
    pub fn glyph(self, style: GlyphStyle) -> &'static str {
        match style {
            GlyphStyle::Emoji => match self {
                CellStatus::Obstacle => "⛰️   ",
                CellStatus::OnPath => "🚗  ",
                CellStatus::Start => "🚦  ",
                CellStatus::Finish => "🏁   ",
                _ => "0   ",
            },
            GlyphStyle::Ascii => match self {
                CellStatus::Empty => ".",
                CellStatus::Obstacle => "#",
                CellStatus::Closed => "+",
                CellStatus::OnPath => "*",
                CellStatus::Start => "S",
                CellStatus::Finish => "F",
            },
        }
    }
}

/// Draws the grid one line per row.
pub fn render(grid: &OccupancyGrid, style: GlyphStyle) -> String {
    let mut out = String::new();
    for (p, status) in grid.cells() {
        out.push_str(status.glyph(style));
        if p.y as usize + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}
