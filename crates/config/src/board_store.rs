//! Board file storage.
//!
//! The board is stored as the JSON form of [`KanbanBoard`]. The application
//! reads it at startup and writes it back after every status change.

use std::path::Path;

use lanedrag_protocol::KanbanBoard;
use tracing::{debug, instrument};

use crate::error::{ConfigError, Result};
use crate::persistence::write_file;

/// Loads a board file.
///
/// Returns `Ok(None)` when the file does not exist yet.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file exists but cannot be read,
/// or [`ConfigError::Board`] if its content is not a valid board.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_board(path: impl AsRef<Path>) -> Result<Option<KanbanBoard>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("board file does not exist yet");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let board = KanbanBoard::from_json(&content).map_err(|source| ConfigError::Board {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(tasks = board.total_tasks(), "loaded board");
    Ok(Some(board))
}

/// Writes a board file, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Board`] if the board cannot be serialized, or
/// [`ConfigError::WriteFile`] if the file cannot be written.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_board(path: impl AsRef<Path>, board: &KanbanBoard) -> Result<()> {
    let path = path.as_ref();
    let content = board.to_json().map_err(|source| ConfigError::Board {
        path: path.to_path_buf(),
        source,
    })?;

    write_file(path, &content)?;
    debug!(tasks = board.total_tasks(), "saved board");
    Ok(())
}
