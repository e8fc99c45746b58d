use crate::error::TurnError;
use crate::game::{Game, COLS};
use crate::shell::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    session: Session,
    names: (String, String),
    rng: StdRng,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Create an app for two named players. With a seed the sequence of
    /// starting players is reproducible across restarts.
    pub fn new(first: impl Into<String>, second: impl Into<String>, seed: Option<u64>) -> Self {
        let names = (first.into(), second.into());
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = Session::start(Game::new(names.0.clone(), names.1.clone()), &mut rng);
        let message = Some(starter_message(&session));
        App {
            session,
            names,
            rng,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 0-based column under the selector
    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        let game = Game::new(self.names.0.clone(), self.names.1.clone());
        self.session = Session::start(game, &mut self.rng);
        self.selected_column = COLS / 2;
        self.message = Some(format!("New game started! {}", starter_message(&self.session)));
    }

    /// Drop the current player's token in the selected column
    fn drop_token(&mut self) {
        match self.session.play(self.selected_column + 1) {
            Ok(outcome) => {
                if outcome.verdict.is_decided() {
                    self.message = Some(format!("{} Press 'r' to restart.", outcome.verdict));
                }
            }
            Err(TurnError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(TurnError::Move(err)) => {
                debug!(column = self.selected_column + 1, %err, "move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

fn starter_message(session: &Session) -> String {
    let starter = session.current_player();
    format!("{} starts. Your colour is {}.", starter.name(), starter.color())
}
