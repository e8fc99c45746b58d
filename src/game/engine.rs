use std::fmt;

use rand::Rng;
use tracing::{debug, instrument};

use super::cell::{CellState, Color};
use super::grid::{Grid, CELLS, COLS, ROWS};
use super::player::Player;
use crate::error::MoveError;

pub const TOKENS_NEEDED_TO_WIN: usize = 4;

/// Where a token landed. Only the engine creates these, so the position is
/// always on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    row: usize,
    column: usize,
    color: Color,
}

impl Placement {
    /// 0-based row, 0 is the top
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Outcome of evaluating the grid after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    WonHorizontal(String),
    WonVertical(String),
    WonDiagonal(String),
    Draw,
    Undecided,
}

impl Verdict {
    /// True for every verdict that ends the game
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::Undecided)
    }

    /// Name of the winning player, if any
    pub fn winner(&self) -> Option<&str> {
        match self {
            Verdict::WonHorizontal(name)
            | Verdict::WonVertical(name)
            | Verdict::WonDiagonal(name) => Some(name.as_str()),
            Verdict::Draw | Verdict::Undecided => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::WonHorizontal(name) => write!(f, "{name} won horizontally."),
            Verdict::WonVertical(name) => write!(f, "{name} won vertically."),
            Verdict::WonDiagonal(name) => write!(f, "{name} won diagonally."),
            Verdict::Draw => write!(f, "Its a Draw!"),
            Verdict::Undecided => Ok(()),
        }
    }
}

/// One game: a grid and exactly two players.
///
/// The engine does not track whose turn it is. Callers pass the acting
/// player's [`Color`] into every turn-dependent operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    player_one: Player,
    player_two: Player,
}

impl Game {
    /// Create a game. The first player plays red, the second yellow.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Game {
            grid: Grid::new(),
            player_one: Player::new(player_one, Color::Red),
            player_two: Player::new(player_two, Color::Yellow),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// The player owning `color`
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Red => &self.player_one,
            Color::Yellow => &self.player_two,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Red => &mut self.player_one,
            Color::Yellow => &mut self.player_two,
        }
    }

    /// Pick either player with equal probability.
    pub fn determine_starting_player<R: Rng>(&self, rng: &mut R) -> &Player {
        if rng.random_bool(0.5) {
            &self.player_one
        } else {
            &self.player_two
        }
    }

    /// The other player of this game
    pub fn switch_current_player(&self, current: Color) -> &Player {
        self.player(current.other())
    }

    /// Whether the top cell of the 1-based `column` is still empty
    pub fn has_free_slot(&self, column: usize) -> Result<bool, MoveError> {
        let col = column_index(column)?;
        Ok(self.grid.cell_at(0, col).is_some_and(CellState::is_empty))
    }

    /// Lowest empty row of the 1-based `column`, `None` when the column is full
    pub fn free_slot(&self, column: usize) -> Result<Option<usize>, MoveError> {
        let col = column_index(column)?;
        Ok((0..ROWS)
            .rev()
            .find(|&row| self.grid.cell_at(row, col).is_some_and(CellState::is_empty)))
    }

    /// Drop a token of `color` into the 1-based `column` and charge it to
    /// that player's supply.
    #[instrument(level = "debug", skip(self))]
    pub fn place_game_token(&mut self, column: usize, color: Color) -> Result<Placement, MoveError> {
        let row = self.free_slot(column)?.ok_or(MoveError::ColumnFull)?;
        let col = column - 1;
        if self.player(color).tokens() == 0 {
            // 42 cells for 21 + 21 tokens: an exhausted player means a full grid
            return Err(MoveError::ColumnFull);
        }

        self.grid.set_cell(row, col, color.to_cell());
        self.player_mut(color).consume_token();
        debug!(row, column, ?color, "token placed");

        Ok(Placement { row, column, color })
    }

    /// Evaluate the grid after `placement`: horizontal, vertical, diagonal,
    /// then draw. The first condition that holds wins the report.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn check_winner(&self, placement: &Placement) -> Verdict {
        let name = || self.player(placement.color).name().to_string();

        if self.check_horizontal(placement.row, placement.color) {
            return Verdict::WonHorizontal(name());
        }
        if self.check_vertical(placement.column - 1, placement.color) {
            return Verdict::WonVertical(name());
        }
        if self.check_diagonal() {
            return Verdict::WonDiagonal(name());
        }
        if self.check_draw() {
            return Verdict::Draw;
        }
        Verdict::Undecided
    }

    /// Tokens on the grid, derived from what both players have spent
    pub fn tokens_placed(&self) -> usize {
        CELLS - usize::from(self.player_one.tokens()) - usize::from(self.player_two.tokens())
    }

    fn check_horizontal(&self, row: usize, color: Color) -> bool {
        match self.grid.row(row) {
            Some(cells) => has_run(cells.iter().copied(), color.to_cell()),
            None => false,
        }
    }

    fn check_vertical(&self, col: usize, color: Color) -> bool {
        has_run(self.grid.column(col), color.to_cell())
    }

    /// Scan the whole grid, row-major, for any run of four along either
    /// diagonal direction.
    fn check_diagonal(&self) -> bool {
        for row in 0..ROWS {
            // a run needs three more rows below its first cell
            if row + TOKENS_NEEDED_TO_WIN > ROWS {
                break;
            }
            for col in 0..COLS {
                let cell = self.grid.cell_at(row, col).unwrap_or_default();
                if cell.is_empty() {
                    continue;
                }

                let down_right = col + TOKENS_NEEDED_TO_WIN <= COLS
                    && (1..TOKENS_NEEDED_TO_WIN)
                        .all(|k| self.grid.cell_at(row + k, col + k) == Some(cell));
                let down_left = col + 1 >= TOKENS_NEEDED_TO_WIN
                    && (1..TOKENS_NEEDED_TO_WIN)
                        .all(|k| self.grid.cell_at(row + k, col - k) == Some(cell));

                if down_right || down_left {
                    debug!(row, col, down_right, down_left, "diagonal run found");
                    return true;
                }
            }
        }
        false
    }

    fn check_draw(&self) -> bool {
        self.player_one.tokens() == 0 && self.player_two.tokens() == 0
    }
}

/// 1-based public column to 0-based index
fn column_index(column: usize) -> Result<usize, MoveError> {
    if Grid::is_valid_column(column) {
        Ok(column - 1)
    } else {
        Err(MoveError::InvalidColumn)
    }
}

/// Whether `cells` contains `TOKENS_NEEDED_TO_WIN` consecutive `target`s
fn has_run(cells: impl Iterator<Item = CellState>, target: CellState) -> bool {
    let mut successive = 0;
    for cell in cells {
        if cell == target {
            successive += 1;
            if successive == TOKENS_NEEDED_TO_WIN {
                return true;
            }
        } else {
            successive = 0;
        }
    }
    false
}
