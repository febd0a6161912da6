//! calctui - Main entry point
//!
//! A four-function terminal calculator with a clean separation between the
//! arithmetic engine and the TUI presentation layer.

mod app;
mod cli;
mod engine;
mod error;
mod history;
mod input;
mod storage;
mod theme;
mod ui;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::storage::Storage;

/// Initialize the tracing subscriber with appropriate settings
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so they never corrupt the TUI frame on stdout;
    // RUST_LOG controls the filter as usual.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("calctui starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let storage = Storage::resolve(cli.data_dir.as_deref());
    debug!("Using data directory: {:?}", storage.dir());

    match cli.command {
        Some(cli::Commands::History { clear }) => run_history_command(&storage, clear)?,
        None => run_tui(storage)?,
    }

    Ok(())
}

/// Print or clear the saved history without entering the TUI
fn run_history_command(
    storage: &Storage,
    clear: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = storage.load_history()?;

    if clear {
        history.clear();
        storage.save_history(&history)?;
        println!("History cleared");
        return Ok(());
    }

    if history.is_empty() {
        println!("No calculations yet");
        return Ok(());
    }

    for entry in history.entries() {
        println!("{} = {}", entry.expression, entry.result);
    }
    Ok(())
}

/// Run the TUI calculator
fn run_tui(storage: Storage) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| error::CalcError::terminal(format!("Failed to enable raw mode: {e}")))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        error::CalcError::terminal(format!("Failed to enter alternate screen: {e}"))
    })?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::CalcError::terminal(format!("Failed to create terminal: {e}")))?;

    // Create and run application
    let mut app = app::App::new(storage);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
