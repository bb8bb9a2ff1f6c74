use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connect_four::config::AppConfig;
use connect_four::game::Game;
use connect_four::ui::{replay::replay, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two-player Connect Four.
#[derive(Parser, Debug)]
#[command(name = "connect-four", about = "Two-player Connect Four", version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml", global = true)]
    config: PathBuf,

    /// Override player 1's color
    #[arg(long, global = true)]
    p1: Option<String>,

    /// Override player 2's color
    #[arg(long, global = true)]
    p2: Option<String>,

    /// Override board height
    #[arg(long, global = true)]
    height: Option<usize>,

    /// Override board width
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Where the terminal UI writes its logs
    #[arg(long, default_value = "connect_four.log", global = true)]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play in the terminal (default)
    Play,

    /// Apply a comma-separated list of columns and print the result
    Replay {
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Replay { ref moves }) => {
            init_tracing_stderr();
            let mut game = new_game(&cli)?;
            replay(&mut game, moves, &mut io::stdout().lock())?;
        }
        Some(Command::Play) | None => {
            init_tracing_file(&cli.log_file)?;
            let game = new_game(&cli)?;
            run_tui(App::new(game))?;
        }
    }
    Ok(())
}

fn new_game(cli: &Cli) -> Result<Game> {
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(p1) = &cli.p1 {
        config.players.p1 = p1.clone();
    }
    if let Some(p2) = &cli.p2 {
        config.players.p2 = p2.clone();
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }

    let game = Game::new(config.game_config()).context("starting game")?;
    Ok(game)
}

fn init_tracing_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file.
fn init_tracing_file(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,connect_four=debug".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    info!("logging to {}", path.display());
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
