//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::Message;
///
/// let msg = Message::PointerDown { column: 4, row: 7 };
/// assert!(msg.is_pointer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left lane.
    NavigateLeft,
    /// Move selection to the right lane.
    NavigateRight,
    /// Move selection up within the current lane.
    NavigateUp,
    /// Move selection down within the current lane.
    NavigateDown,
    /// Pick up the selected task for a keyboard move.
    Grab,
    /// Drop a grabbed task into the currently targeted lane.
    Drop,
    /// Escape: cancel the current drag, or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Pointer pressed at coordinates (column, row).
    PointerDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved while pressed.
    PointerDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Pointer released at coordinates (column, row).
    PointerUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
    /// The platform interrupted the pointer gesture (focus loss, resize).
    CancelGesture,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Grab.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message belongs to a pointer gesture.
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerDrag { .. }
                | Self::PointerUp { .. }
                | Self::CancelGesture
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
