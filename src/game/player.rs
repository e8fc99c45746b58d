use super::cell::Color;
use super::grid::CELLS;

/// Tokens each player starts with; together they exactly fill the grid.
pub const TOKENS_PER_PLAYER: u8 = (CELLS / 2) as u8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    tokens: u8,
}

impl Player {
    /// Create a player with a full token supply. The colour is assigned by the
    /// game that owns the player.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            tokens: TOKENS_PER_PLAYER,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Tokens this player has not placed yet
    pub fn tokens(&self) -> u8 {
        self.tokens
    }

    /// Use up one token. The game only calls this after a successful placement,
    /// so the supply never runs below zero.
    pub(crate) fn consume_token(&mut self) {
        debug_assert!(self.tokens > 0, "{} has no tokens left", self.name);
        self.tokens = self.tokens.saturating_sub(1);
    }
}
