//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards, both
//! resting in their lane and lifted off the board while being dragged.

use lanedrag_protocol::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::gesture::{CardVisual, Placement};

/// Visual token for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Neutral.
    Secondary,
    /// Accent.
    Primary,
    /// Completed.
    Success,
}

impl BadgeStyle {
    /// Returns the terminal color of the badge.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Secondary => Color::DarkGray,
            Self::Primary => Color::Blue,
            Self::Success => Color::Green,
        }
    }
}

/// Returns the badge style for a status label.
///
/// Labels that do not name a known status get the neutral style.
///
/// # Examples
///
/// ```
/// use lanedrag_tui::widgets::{badge_style, BadgeStyle};
///
/// assert_eq!(badge_style("To Do"), BadgeStyle::Secondary);
/// assert_eq!(badge_style("In Progress"), BadgeStyle::Primary);
/// assert_eq!(badge_style("Done"), BadgeStyle::Success);
/// assert_eq!(badge_style("Blocked"), BadgeStyle::Secondary);
/// ```
#[must_use]
pub fn badge_style(label: &str) -> BadgeStyle {
    match label {
        "In Progress" => BadgeStyle::Primary,
        "Done" => BadgeStyle::Success,
        _ => BadgeStyle::Secondary,
    }
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ╭────────────────╮
/// │Title           │
/// │description...  │
/// │ In Progress    │
/// ╰────────────────╯
/// ```
///
/// The description line is left out when the task has none.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lanedrag_protocol::Task;
/// use lanedrag_tui::widgets::render_task_card;
///
/// let task = Task::new("Implement feature").with_description("Add new functionality");
/// let area = Rect::new(0, 0, 20, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    render_card(task, is_selected, Style::default(), area, buf);
}

/// Renders the dim outline left in a lane while its card is dragged away.
pub fn render_card_placeholder(area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .render(area, buf);
}

/// Renders a card that has been picked up.
///
/// `slot` is the area the card occupies in its lane. A card with a fixed
/// placement is drawn at that position instead, clamped into `screen`. The
/// card is widened by the visual's scale, dimmed when its opacity is below
/// one, and given a one-cell shadow.
pub fn render_lifted_card(
    task: &Task,
    visual: &CardVisual,
    slot: Rect,
    screen: Rect,
    buf: &mut Buffer,
) {
    let area = lifted_area(visual, slot, screen);
    if area.is_empty() {
        return;
    }

    if visual.shadow {
        render_shadow(area, screen, buf);
    }

    let mut overlay = Style::default();
    if visual.opacity < 1.0 {
        overlay = overlay.add_modifier(Modifier::DIM);
    }

    Clear.render(area, buf);
    render_card(task, true, overlay, area, buf);
}

/// Computes where a lifted card is drawn.
fn lifted_area(visual: &CardVisual, slot: Rect, screen: Rect) -> Rect {
    let width = scaled(slot.width, visual.scale).min(screen.width);
    let height = slot.height.min(screen.height);

    let (x, y) = match visual.placement {
        Placement::InFlow => (i32::from(slot.x), i32::from(slot.y)),
        Placement::Fixed { x, y } => (x, y),
    };

    Rect::new(
        clamp_axis(x, screen.x, screen.width, width),
        clamp_axis(y, screen.y, screen.height, height),
        width,
        height,
    )
}

fn scaled(length: u16, scale: f32) -> u16 {
    // Float to int casts saturate.
    (f32::from(length) * scale).round() as u16
}

/// Clamps a start coordinate so that `[start, start + length)` stays within
/// `[origin, origin + extent)`.
fn clamp_axis(start: i32, origin: u16, extent: u16, length: u16) -> u16 {
    let min = i32::from(origin);
    let max = min + i32::from(extent.saturating_sub(length));
    // The clamped value lies between two u16 values.
    u16::try_from(start.clamp(min, max)).unwrap_or(origin)
}

/// Shades the column right of `card` and the row below it.
fn render_shadow(card: Rect, screen: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(Color::DarkGray).bg(Color::Black);
    let right = card.right();
    let bottom = card.bottom();

    let column = (right < screen.right())
        .then(|| (card.y + 1..=bottom.min(screen.bottom() - 1)).map(move |y| (right, y)));
    let row = (bottom < screen.bottom()).then(|| (card.x + 1..right).map(move |x| (x, bottom)));

    for position in column.into_iter().flatten().chain(row.into_iter().flatten()) {
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_symbol("▒").set_style(style);
        }
    }
}

fn render_card(task: &Task, is_selected: bool, overlay: Style, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let badge = badge_style(task.status.label());
    let (border_style, title_style) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::White),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut content = vec![Line::from(Span::styled(
        truncate_string(&task.title, inner_width),
        title_style,
    ))];

    if let Some(description) = task.description_text() {
        content.push(Line::from(Span::styled(
            truncate_string(description, inner_width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    content.push(Line::from(Span::styled(
        truncate_string(&format!(" {} ", task.status.label()), inner_width),
        Style::default().fg(Color::White).bg(badge.color()),
    )));

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
        .style(overlay)
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
