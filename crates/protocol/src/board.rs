//! Kanban board types and structures.
//!
//! This module defines the board layout types including lanes and the
//! overall board structure that organizes tasks by status.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::status::TaskStatus;
use crate::task::{Task, TaskId};

/// A single lane (column) on the Kanban board.
///
/// Contains tasks that share the same status.
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::{Lane, TaskStatus};
///
/// let lane = Lane::new(TaskStatus::ToDo);
/// assert!(lane.is_empty());
/// assert_eq!(lane.status, TaskStatus::ToDo);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    /// The status shared by every task in this lane.
    pub status: TaskStatus,
    /// Tasks currently in this lane, ordered by position.
    pub tasks: Vec<Task>,
}

impl Lane {
    /// Creates a new empty lane for the given status.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the lane has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the header text shown above the lane, e.g. `"In Progress (3)"`.
    ///
    /// The text always starts with the status label, so it resolves back to
    /// the lane's status through [`TaskStatus::from_header_text`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::{Lane, TaskStatus};
    ///
    /// let lane = Lane::new(TaskStatus::InProgress);
    /// assert_eq!(lane.header_text(), "In Progress (0)");
    /// ```
    #[must_use]
    pub fn header_text(&self) -> String {
        format!("{} ({})", self.status.label(), self.len())
    }

    /// Adds a task to the end of this lane.
    ///
    /// Note: This does not update the task's `status` field. Use
    /// [`KanbanBoard::move_task`] for proper task movement.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns a task by ID, if found.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        Some(self.tasks.remove(pos))
    }

    /// Returns the position of a task within the lane.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Returns a reference to a task by ID, if found.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// A Kanban board with one lane per [`TaskStatus`].
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::{KanbanBoard, TaskStatus, Task};
///
/// let mut board = KanbanBoard::new();
/// let task = Task::new("Implement feature");
/// let id = task.id;
///
/// board.add_task(task);
/// assert!(board.move_task(id, TaskStatus::Done));
/// assert_eq!(board.lane(TaskStatus::Done).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    /// The lanes of the board, indexed by [`TaskStatus::index`].
    pub lanes: [Lane; 3],
}

impl Default for KanbanBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KanbanBoard {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lanes: TaskStatus::all().map(Lane::new),
        }
    }

    /// Creates a board from a list of tasks, placing each in the lane of its
    /// status.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.add_task(task);
        }
        board
    }

    /// Returns a reference to the lane for the given status.
    #[must_use]
    pub fn lane(&self, status: TaskStatus) -> &Lane {
        &self.lanes[status.index()]
    }

    /// Returns a mutable reference to the lane for the given status.
    #[must_use]
    pub fn lane_mut(&mut self, status: TaskStatus) -> &mut Lane {
        &mut self.lanes[status.index()]
    }

    /// Adds a task to the lane matching `task.status`.
    pub fn add_task(&mut self, task: Task) {
        let status = task.status;
        self.lane_mut(status).add_task(task);
    }

    /// Finds a task by ID across all lanes.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.lanes.iter().find_map(|lane| lane.get_task(id))
    }

    /// Returns the lane status and position of a task.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<(TaskStatus, usize)> {
        self.lanes
            .iter()
            .find_map(|lane| lane.position(id).map(|pos| (lane.status, pos)))
    }

    /// Moves a task to the lane for `status`, updating the task itself.
    ///
    /// The task is appended to the end of the target lane. Moving a task to
    /// the status it already has leaves it in place and returns `true`.
    /// Returns `false` if the task is not on the board.
    pub fn move_task(&mut self, id: TaskId, status: TaskStatus) -> bool {
        let Some((from, _)) = self.locate(id) else {
            return false;
        };
        if from == status {
            return true;
        }

        let Some(mut task) = self.lane_mut(from).remove_task(id) else {
            return false;
        };
        task.set_status(status);
        self.lane_mut(status).add_task(task);
        true
    }

    /// Like [`KanbanBoard::move_task`], but reports a missing task as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TaskNotFound`] if no task has the given ID.
    pub fn try_move_task(&mut self, id: TaskId, status: TaskStatus) -> Result<()> {
        if self.move_task(id, status) {
            Ok(())
        } else {
            Err(ProtocolError::TaskNotFound(id))
        }
    }

    /// Returns the total number of tasks across all lanes.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Removes a task by ID from any lane.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        self.lanes.iter_mut().find_map(|lane| lane.remove_task(id))
    }

    /// Serializes the board to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Parses a board from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the input is not a
    /// valid board.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
    }
}
