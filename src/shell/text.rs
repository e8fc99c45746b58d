//! Line-oriented play over any reader/writer pair, as used on stdin/stdout.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, warn};

use super::Session;
use crate::error::{MoveError, ShellError, TurnError};
use crate::game::{Game, Grid, Verdict};

pub const FIRST_NAME: &str = "Please enter the name of the first player.";
pub const SECOND_NAME: &str = "Please enter the name of the second player.";
pub const GET_COLUMN: &str =
    "Please enter the number of the column you want to place your token in.";
pub const COLUMN_RANGE: &str = "Please choose from 1 to 7.";

/// Parse a line of user input as a 1-based column.
///
/// Anything that is not a number in 1..=7, including negative numbers and
/// words, is an invalid column.
pub fn parse_column(input: &str) -> Result<usize, MoveError> {
    let column = input
        .trim()
        .parse::<usize>()
        .map_err(|_| MoveError::InvalidColumn)?;
    if Grid::is_valid_column(column) {
        Ok(column)
    } else {
        Err(MoveError::InvalidColumn)
    }
}

pub struct TextShell<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> TextShell<I, O> {
    pub fn new(input: I, output: O) -> Self {
        TextShell { input, output }
    }

    /// Play one full game. Names that are `None` are asked for.
    pub fn run<R: Rng>(
        &mut self,
        first: Option<String>,
        second: Option<String>,
        rng: &mut R,
    ) -> Result<Verdict, ShellError> {
        let first = match first {
            Some(name) => name,
            None => self.read_name(FIRST_NAME)?,
        };
        let second = match second {
            Some(name) => name,
            None => self.read_name(SECOND_NAME)?,
        };

        let mut session = Session::start(Game::new(first, second), rng);
        let starter = session.current_player();
        writeln!(
            self.output,
            "{} starts. Your colour is {}.",
            starter.name(),
            starter.color()
        )?;

        loop {
            writeln!(self.output, "{}", session.game().grid())?;
            writeln!(
                self.output,
                "{}'s turn. {GET_COLUMN}",
                session.current_player().name()
            )?;
            writeln!(self.output, "{COLUMN_RANGE}")?;

            if let Some(verdict) = self.take_turn(&mut session)? {
                writeln!(self.output, "{}", session.game().grid())?;
                writeln!(self.output, "{verdict}")?;
                self.output.flush()?;
                return Ok(verdict);
            }
        }
    }

    /// Keep asking until the current player places a token. Returns the
    /// verdict when that move ended the game.
    fn take_turn(&mut self, session: &mut Session) -> Result<Option<Verdict>, ShellError> {
        loop {
            let line = self.read_line()?;
            let result = parse_column(&line)
                .map_err(TurnError::from)
                .and_then(|column| session.play(column));

            match result {
                Ok(outcome) if outcome.verdict.is_decided() => return Ok(Some(outcome.verdict)),
                Ok(_) => return Ok(None),
                Err(TurnError::Move(err)) => {
                    debug!(input = line.trim(), %err, "move rejected");
                    writeln!(self.output, "{err}")?;
                }
                Err(TurnError::GameOver) => return Ok(Some(session.verdict().clone())),
            }
        }
    }

    fn read_name(&mut self, prompt: &str) -> Result<String, ShellError> {
        loop {
            writeln!(self.output, "{prompt}")?;
            let line = self.read_line()?;
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }

    fn read_line(&mut self) -> Result<String, ShellError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("input closed mid-game");
            return Err(ShellError::InputClosed);
        }
        Ok(line)
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> O {
        self.output
    }
}
