//! Centralized layout measurements for the TUI.
//!
//! Shared row and column counts used by more than one rendering component.

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// Border (2 rows), title, description and the status badge.
pub const TASK_CARD_HEIGHT: u16 = 5;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. A lane
/// needs its border plus one full card, and the status bar needs a row.
pub const MIN_HEIGHT: u16 = 2 + TASK_CARD_HEIGHT + STATUS_BAR_HEIGHT + 2;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Three lanes, each wide enough for borders and a truncated title.
pub const MIN_WIDTH: u16 = 40;
