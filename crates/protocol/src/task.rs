//! Task-related types for the Kanban board.
//!
//! This module defines the task identifier and the task structure itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::TaskStatus;

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// A task on the Kanban board.
///
/// Represents a unit of work tracked through the board's columns. The status
/// decides which column the task is shown in.
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::{Task, TaskStatus};
///
/// let task = Task::new("Implement feature X");
/// assert_eq!(task.status, TaskStatus::ToDo);
/// assert!(task.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current workflow status of the task.
    pub status: TaskStatus,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given title.
    ///
    /// The task starts in `To Do` without a description. Timestamps are set
    /// to the current time.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(TaskId::new_v4(), title)
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for testing or when recreating tasks from persistent storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::{Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Test task");
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::Task;
    ///
    /// let task = Task::new("Fix bug").with_description("The login button is broken");
    /// assert_eq!(task.description_text(), Some("The login button is broken"));
    /// ```
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status without touching timestamps.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the description if it is present and non-empty.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Changes the status and refreshes the `updated_at` timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::{Task, TaskStatus};
    ///
    /// let mut task = Task::new("Work item");
    /// task.set_status(TaskStatus::Done);
    /// assert_eq!(task.status, TaskStatus::Done);
    /// ```
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::ToDo),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Done),
        ]
    }

    prop_compose! {
        fn arb_task()(
            title in "[a-zA-Z][a-zA-Z0-9 ]{0,50}",
            description in proptest::option::of("[a-zA-Z0-9 .,!?]{0,200}"),
            status in arb_status(),
        ) -> Task {
            let mut task = Task::new(title).with_status(status);
            task.description = description;
            task
        }
    }

    proptest! {
        /// Tests that Task serialization preserves every field.
        #[test]
        fn task_roundtrip(task in arb_task()) {
            let json = serde_json::to_string(&task).expect("serialize");
            let parsed: Task = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(task, parsed);
        }
    }
}
