//! Task status values and label parsing.
//!
//! A task's status doubles as the identity of the board column it lives in.
//! Statuses travel as their human-readable labels (`"To Do"`, `"In Progress"`,
//! `"Done"`), both on disk and in column headers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// The workflow status of a task.
///
/// The order reflects the typical progression of work.
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::TaskStatus;
///
/// let status = TaskStatus::InProgress;
/// assert_eq!(status.label(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    /// Work that has not been started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Work currently underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished work.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Returns all statuses in workflow order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::TaskStatus;
    ///
    /// let all = TaskStatus::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], TaskStatus::ToDo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::ToDo, Self::InProgress, Self::Done]
    }

    /// Returns the display label for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::ToDo.label(), "To Do");
    /// assert_eq!(TaskStatus::Done.label(), "Done");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the index of this status in the workflow (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `TaskStatus` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_index(1), Some(TaskStatus::InProgress));
    /// assert_eq!(TaskStatus::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ToDo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the next status in the workflow, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous status in the workflow, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }

    /// Parses an exact status label.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_label("Done"), Some(TaskStatus::Done));
    /// assert_eq!(TaskStatus::from_label("done"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.label() == label)
    }

    /// Resolves a status from column header text.
    ///
    /// The header is trimmed and must begin with one of the status labels,
    /// followed either by the end of the text or by whitespace (so headers
    /// like `"In Progress 3 tasks"` carry a trailing count). Anything else
    /// resolves to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::TaskStatus;
    ///
    /// assert_eq!(
    ///     TaskStatus::from_header_text("  In Progress 3 tasks "),
    ///     Some(TaskStatus::InProgress)
    /// );
    /// assert_eq!(TaskStatus::from_header_text("Doneish"), None);
    /// assert_eq!(TaskStatus::from_header_text("Backlog"), None);
    /// ```
    #[must_use]
    pub fn from_header_text(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::all().into_iter().find(|status| {
            text.strip_prefix(status.label())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ProtocolError::UnknownStatus(s.to_string()))
    }
}
