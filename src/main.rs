use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, Interface};
use connect_four::shell::text::TextShell;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Connect Four against another person at the same keyboard.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Name of the first (red) player
    #[arg(long)]
    first: Option<String>,

    /// Name of the second (yellow) player
    #[arg(long)]
    second: Option<String>,

    /// Seed for choosing the starting player
    #[arg(long)]
    seed: Option<u64>,

    /// Use the full-screen interface instead of prompts
    #[arg(long)]
    tui: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.first.is_some() {
        config.players.first = cli.first;
    }
    if cli.second.is_some() {
        config.players.second = cli.second;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if cli.tui {
        config.ui.interface = Interface::Tui;
    }
    config.validate().context("invalid command line options")?;

    match config.ui.interface {
        Interface::Text => run_text(config),
        Interface::Tui => run_tui(config),
    }
}

fn run_text(config: AppConfig) -> Result<()> {
    let mut rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut shell = TextShell::new(io::stdin().lock(), io::stdout().lock());
    let verdict = shell
        .run(config.players.first, config.players.second, &mut rng)
        .context("playing in text mode")?;
    info!(%verdict, "finished");
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    let first = config.players.first.unwrap_or_else(|| "Player 1".to_string());
    let second = config.players.second.unwrap_or_else(|| "Player 2".to_string());
    let mut app = App::new(first, second, config.game.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal interface")
}
