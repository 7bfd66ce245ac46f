//! Widget components for the lanedrag TUI.
//!
//! Each widget is a plain function that renders state into a [`Buffer`].
//! Widgets that take part in dragging also write into the hit-test registries
//! ([`DropZoneRegistry`], [`CardLayout`]) so the next pointer event can be
//! resolved against what is actually on screen.
//!
//! # Modules
//!
//! - [`board`]: Renders the three lanes and registers them as drop zones
//! - [`lane`]: Renders a single lane with its header and cards
//! - [`task_card`]: Renders cards, their status badge, and the lifted drag card
//! - [`status_bar`]: Renders the footer with the last status message and hints
//! - [`help`]: Renders the keybinding overlay
//!
//! # Badge colors
//!
//! | Header text | Badge |
//! |-------------|-------|
//! | `To Do ...` | Gray (`Color::DarkGray`) |
//! | `In Progress ...` | Blue (`Color::Blue`) |
//! | `Done ...` | Green (`Color::Green`) |
//! | anything else | Gray (`Color::DarkGray`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use lanedrag_protocol::{KanbanBoard, Task};
//! use lanedrag_tui::drop_zone::{CardLayout, DropZoneRegistry};
//! use lanedrag_tui::widgets::{self, BoardView};
//!
//! let mut board = KanbanBoard::new();
//! board.add_task(Task::new("Example"));
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(
//!     &board,
//!     &BoardView::default(),
//!     area,
//!     &mut buf,
//!     &mut DropZoneRegistry::new(),
//!     &mut CardLayout::new(),
//! );
//! ```
//!
//! [`Buffer`]: ratatui::buffer::Buffer
//! [`DropZoneRegistry`]: crate::drop_zone::DropZoneRegistry
//! [`CardLayout`]: crate::drop_zone::CardLayout

pub mod board;
pub mod help;
pub mod lane;
pub mod status_bar;
pub mod task_card;

pub use board::{BoardView, lane_zone_id, render_board};
pub use help::render_help_overlay;
pub use lane::{LaneContext, LanePosition, render_lane};
pub use status_bar::{StatusHints, render_status_bar};
pub use task_card::{
    BadgeStyle, badge_style, render_card_placeholder, render_lifted_card, render_task_card,
};

#[cfg(test)]
mod tests;
