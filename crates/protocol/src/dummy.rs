//! Sample data for first launch and demonstration.
//!
//! This module provides a small board with realistic tasks so that a fresh
//! installation has something to drag around.
//!
//! # Examples
//!
//! ```
//! use lanedrag_protocol::dummy::dummy_board;
//!
//! let board = dummy_board();
//! assert_eq!(board.total_tasks(), 6);
//! ```

use crate::board::KanbanBoard;
use crate::status::TaskStatus;
use crate::task::Task;

/// Generates a sample board with tasks in every column.
///
/// - **To Do**: 3 tasks (one without a description)
/// - **In Progress**: 2 tasks
/// - **Done**: 1 task
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::dummy::dummy_board;
/// use lanedrag_protocol::TaskStatus;
///
/// let board = dummy_board();
/// assert_eq!(board.lane(TaskStatus::ToDo).len(), 3);
/// assert_eq!(board.lane(TaskStatus::InProgress).len(), 2);
/// assert_eq!(board.lane(TaskStatus::Done).len(), 1);
/// ```
#[must_use]
pub fn dummy_board() -> KanbanBoard {
    KanbanBoard::from_tasks([
        Task::new("Write release notes").with_description("Summarize changes since 0.3"),
        Task::new("Triage bug reports").with_description("Label and assign new issues"),
        Task::new("Plan next sprint"),
        Task::new("Touch drag support")
            .with_description("Drag cards between columns with the mouse")
            .with_status(TaskStatus::InProgress),
        Task::new("Persist board changes")
            .with_description("Save the board file after every move")
            .with_status(TaskStatus::InProgress),
        Task::new("Set up CI")
            .with_description("Run tests on every push")
            .with_status(TaskStatus::Done),
    ])
}
