//! Terminal UI for the lanedrag application.
//!
//! This crate provides a Ratatui-based Kanban board whose cards can be
//! dragged between lanes with the mouse or moved with the keyboard.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`gesture`]: The drag session of one card and its visual state
//! - [`drop_zone`]: Hit-testing of drop zones and rendered cards
//! - [`geometry`]: Pointer positions and inclusive bounds
//! - [`widgets`]: Rendering functions
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use lanedrag_protocol::KanbanBoard;
//! use lanedrag_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal(true)?;
//!
//!     let board = KanbanBoard::new();
//!     let mut app = App::new(board);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod drop_zone;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use drop_zone::{CardLayout, DropZone, DropZoneRegistry};
pub use geometry::{Bounds, Point};
pub use gesture::{CardHandler, CardVisual, Disposition, GestureController, Placement};
pub use state::{ActiveGesture, AppState, KeyboardGrab};
