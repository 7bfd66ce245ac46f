//! Shared protocol types for the lanedrag application.
//!
//! This crate defines the core types used across all lanedrag components,
//! including tasks, statuses, the Kanban board structure, messages, and
//! error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`status`]: The fixed set of task statuses and label parsing
//! - [`task`]: Task identifiers and the `Task` struct
//! - [`board`]: Kanban board lanes and the `KanbanBoard` struct
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use lanedrag_protocol::{KanbanBoard, Task, TaskStatus};
//!
//! let mut board = KanbanBoard::new();
//!
//! // New tasks start in "To Do"
//! let task = Task::new("Implement feature").with_description("Add user authentication");
//! let task_id = task.id;
//! board.add_task(task);
//!
//! // Move the task through the workflow
//! board.move_task(task_id, TaskStatus::InProgress);
//! assert_eq!(board.get_task(task_id).map(|t| t.status), Some(TaskStatus::InProgress));
//! ```

pub mod board;
pub mod dummy;
pub mod error;
pub mod message;
pub mod status;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{KanbanBoard, Lane};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use status::TaskStatus;
pub use task::{Task, TaskId};
