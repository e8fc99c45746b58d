//! The interface layer around the engine: a turn driver shared by every front
//! end, and the line-oriented prompt loop.

mod session;
pub mod text;

pub use session::{Phase, Session, TurnOutcome};
