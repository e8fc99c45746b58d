//! Full-screen terminal front end built on ratatui.

mod app;
mod game_view;

pub use app::App;
