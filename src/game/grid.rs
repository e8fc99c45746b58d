use std::fmt;

use super::cell::CellState;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

const COLUMN_NUMERATION: &str = "1 2 3 4 5 6 7";
const FINISHING_LINE: &str = "--------------";

/// The 6x7 playing field.
///
/// Row 0 is the top, row 5 is the bottom. Columns are numbered 1..=7 at the
/// public API; `cell_at` and `set_cell` take 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[CellState; COLS]; ROWS],
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Empty; COLS]; ROWS],
        }
    }

    /// True iff `column` is one of the 1-based columns 1..=7.
    pub fn is_valid_column(column: usize) -> bool {
        (1..=COLS).contains(&column)
    }

    /// Get the cell at a 0-based position, `None` when off the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite a cell. Returns false (and changes nothing) when off the grid.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, state: CellState) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> Option<&[CellState; COLS]> {
        self.cells.get(row)
    }

    /// One 0-based column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().filter_map(move |r| r.get(col).copied())
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Human-readable rendering: column header, one line per row, closing divider.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{COLUMN_NUMERATION}")?;
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}|", cell.label())?;
            }
        }
        write!(f, "\n{FINISHING_LINE}")
    }
}
