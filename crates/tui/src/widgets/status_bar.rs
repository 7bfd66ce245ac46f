//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints and the latest status message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Which set of keybinding hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusHints {
    /// Browsing the board.
    #[default]
    Board,
    /// A task is grabbed for a keyboard move.
    Moving,
}

impl StatusHints {
    fn bindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Board => &[
                ("←→↑↓", "Navigate"),
                ("m", "Move"),
                ("?", "Help"),
                ("Ctrl+C", "Quit"),
            ],
            Self::Moving => &[
                ("←→", "Choose lane"),
                ("Enter", "Drop"),
                ("Esc", "Cancel"),
            ],
        }
    }
}

/// Renders the status bar.
///
/// The bar is a single row: the status message (if any) followed by the
/// keybinding hints.
///
/// # Layout
///
/// ```text
/// Moved "Fix login" to Done  |  ←→↑↓ Navigate  m Move  ? Help  Ctrl+C Quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lanedrag_tui::widgets::{render_status_bar, StatusHints};
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some("Task moved to In Progress"), StatusHints::Board, area, &mut buf);
/// ```
pub fn render_status_bar(message: Option<&str>, hints: StatusHints, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let message_style = Style::default().fg(Color::Cyan);

    let mut spans = Vec::new();
    if let Some(message) = message {
        spans.push(Span::styled(message.to_string(), message_style));
        spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, action)) in hints.bindings().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn board_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(None, StatusHints::Board, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Navigate"));
        assert!(content.contains("m Move"));
        assert!(content.contains("Quit"));
        assert!(!content.contains('|'));
    }

    #[test]
    fn moving_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(None, StatusHints::Moving, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Enter Drop"));
        assert!(content.contains("Esc Cancel"));
        assert!(!content.contains("Navigate"));
    }

    #[test]
    fn message_comes_first() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(Some("Test message"), StatusHints::Board, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with("Test message  |"));
    }
}
