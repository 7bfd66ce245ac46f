//! lanedrag - a terminal Kanban board with draggable task cards.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use anyhow::Context;
use lanedrag_config::{Config, board_store};
use lanedrag_protocol::{KanbanBoard, dummy::dummy_board};
use lanedrag_tui::{App, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The UI still works without a log file.
    if let Err(err) = logging::init() {
        eprintln!("lanedrag: logging disabled: {err}");
    }

    let config = Config::load().await.context("failed to load configuration")?;
    let board = load_board(&config)?;
    info!(tasks = board.total_tasks(), "starting");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal(config.mouse_capture)?;

    let mut app = App::with_config(board, config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Loads the configured board file, or the sample board when there is none.
fn load_board(config: &Config) -> anyhow::Result<KanbanBoard> {
    let Some(path) = config.board_file.as_deref() else {
        return Ok(dummy_board());
    };

    let board = board_store::load_board(path)
        .with_context(|| format!("failed to load board from {}", path.display()))?;
    Ok(board.unwrap_or_else(|| {
        info!(path = %path.display(), "no board file yet, starting from the sample board");
        dummy_board()
    }))
}
