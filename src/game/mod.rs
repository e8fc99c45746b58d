//! Core Connect Four logic: cell states, the grid, players, and the game
//! engine with move validation and win/draw detection.

mod cell;
mod engine;
mod grid;
mod player;

pub use cell::{CellState, Color};
pub use engine::{Game, Placement, Verdict, TOKENS_NEEDED_TO_WIN};
pub use grid::{Grid, CELLS, COLS, ROWS};
pub use player::{Player, TOKENS_PER_PLAYER};
