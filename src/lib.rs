//! # Connect Four
//!
//! Two players take turns dropping tokens into a 6x7 grid; four in a row
//! horizontally, vertically, or diagonally wins, and a full grid without a
//! winner is a draw.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: cells, grid, players, win/draw detection
//! - [`shell`] — Turn driver and the line-oriented text interface
//! - [`ui`] — Full-screen terminal interface
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod shell;
pub mod ui;
