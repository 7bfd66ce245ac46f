//! Lane rendering widget.
//!
//! This module provides functions for rendering individual Kanban lanes
//! with their headers and task lists.

use lanedrag_protocol::{Lane, TaskId};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::task_card::{render_card_placeholder, render_task_card};
use crate::drop_zone::CardLayout;
use crate::layout::TASK_CARD_HEIGHT;

/// Position of a lane in the horizontal layout.
///
/// Used to determine which borders to render for each lane, enabling
/// collapsed borders between adjacent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// First (leftmost) lane - has left border with rounded corners.
    First,
    /// Middle lanes - has left border with T-connectors (no rounded corners on left).
    Middle,
    /// Last (rightmost) lane - has both borders, rounded on right, T-connectors on left.
    Last,
}

impl LanePosition {
    /// Returns the position of lane `index` out of `count`.
    #[must_use]
    pub fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

/// Border set for the first (leftmost) lane: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle lanes: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) lane: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Per-lane rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneContext {
    /// Whether this lane currently has focus.
    pub is_focused: bool,
    /// Index of the selected task within this lane, if any.
    pub selected_idx: Option<usize>,
    /// The lane's position in the horizontal layout.
    pub position: LanePosition,
    /// Whether the previous (left) lane is focused, for coloring shared borders.
    pub prev_focused: bool,
    /// Whether a keyboard move currently targets this lane.
    pub is_drop_target: bool,
    /// A card being dragged by the pointer. Its slot shows an outline.
    pub detached: Option<TaskId>,
}

impl LaneContext {
    /// Options for an unfocused lane at `position`.
    #[must_use]
    pub const fn new(position: LanePosition) -> Self {
        Self {
            is_focused: false,
            selected_idx: None,
            position,
            prev_focused: false,
            is_drop_target: false,
            detached: None,
        }
    }
}

/// Renders a single lane to the buffer.
///
/// A lane displays its header (status label and task count) followed by a
/// vertical list of task cards. Empty lanes show a "No tasks" placeholder
/// message. The area of every card drawn is recorded in `cards`.
///
/// # Layout
///
/// ```text
/// ╭────────────────
/// │In Progress (2)
/// │╭──────────────╮
/// ││Task 1        │   <- Task cards
/// ││desc...       │
/// ││ In Progress  │
/// │╰──────────────╯
/// ╰────────────────
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lanedrag_protocol::{Lane, Task, TaskStatus};
/// use lanedrag_tui::drop_zone::CardLayout;
/// use lanedrag_tui::widgets::{render_lane, LaneContext, LanePosition};
///
/// let mut lane = Lane::new(TaskStatus::ToDo);
/// lane.add_task(Task::new("Task 1"));
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
/// let mut cards = CardLayout::new();
///
/// render_lane(&lane, &LaneContext::new(LanePosition::First), area, &mut buf, &mut cards);
/// assert_eq!(cards.len(), 1);
/// ```
pub fn render_lane(
    lane: &Lane,
    ctx: &LaneContext,
    area: Rect,
    buf: &mut Buffer,
    cards: &mut CardLayout,
) {
    let accent = if ctx.is_drop_target {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let highlighted = ctx.is_focused || ctx.is_drop_target;

    let border_style = if highlighted {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if highlighted {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent lanes; only the last lane draws
    // a right border.
    let (borders, border_set) = match ctx.position {
        LanePosition::First => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_FIRST),
        LanePosition::Middle => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_MIDDLE),
        LanePosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };

    let block = Block::default()
        .title(Span::styled(lane.header_text(), title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The left border is shared with the previous lane, so recolor it when
    // that lane is focused.
    if ctx.prev_focused && !highlighted && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if lane.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let visible_tasks = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;
    let scroll_offset = calculate_scroll_offset(ctx.selected_idx, lane.len(), visible_tasks);

    let task_count = lane.len().saturating_sub(scroll_offset).min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        let Some(task) = lane.tasks.get(task_idx) else {
            break;
        };

        if ctx.detached == Some(task.id) {
            render_card_placeholder(*task_area, buf);
        } else {
            let is_selected = ctx.is_focused && ctx.selected_idx == Some(task_idx);
            render_task_card(task, is_selected, *task_area, buf);
        }
        cards.insert(task.id, *task_area);
    }
}

/// Renders a placeholder message for empty lanes.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected task visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks.saturating_sub(visible_tasks);

    if selected < visible_tasks / 2 {
        0
    } else {
        (selected.saturating_sub(visible_tasks / 2)).min(max_offset)
    }
}
