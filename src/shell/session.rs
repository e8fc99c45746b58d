use rand::Rng;
use tracing::{debug, info, instrument};

use crate::error::TurnError;
use crate::game::{Color, Game, Placement, Player, Verdict};

/// Where a session stands. A session only exists once a starting player has
/// been picked, so there is no not-started phase here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Draw,
}

/// Result of one successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub placement: Placement,
    pub verdict: Verdict,
}

/// Drives a [`Game`] turn by turn: validates, places, evaluates, and hands the
/// move to the other player while the game continues.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    current: Color,
    turns_played: usize,
    verdict: Verdict,
}

impl Session {
    /// Pick the starting player at random and begin the game.
    #[instrument(skip(game, rng), fields(one = game.player_one().name(), two = game.player_two().name()))]
    pub fn start<R: Rng>(game: Game, rng: &mut R) -> Self {
        let current = game.determine_starting_player(rng).color();
        info!(starter = game.player(current).name(), "game started");
        Session {
            game,
            current,
            turns_played: 0,
            verdict: Verdict::Undecided,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whose turn it is. After the game ends this stays on the player who made
    /// the final move.
    pub fn current_player(&self) -> &Player {
        self.game.player(self.current)
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn phase(&self) -> Phase {
        match self.verdict {
            Verdict::Undecided => Phase::InProgress,
            Verdict::Draw => Phase::Draw,
            _ => Phase::Won,
        }
    }

    pub fn is_over(&self) -> bool {
        self.verdict.is_decided()
    }

    /// Play the current player's token into the 1-based `column`.
    pub fn play(&mut self, column: usize) -> Result<TurnOutcome, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let placement = self.game.place_game_token(column, self.current)?;
        let verdict = self.game.check_winner(&placement);
        self.turns_played += 1;

        if verdict.is_decided() {
            info!(turns = self.turns_played, %verdict, "game over");
        } else {
            self.current = self.game.switch_current_player(self.current).color();
            debug!(next = self.current_player().name(), "turn passed");
        }
        self.verdict = verdict.clone();

        Ok(TurnOutcome { placement, verdict })
    }
}
