//! Kanban board rendering widget.
//!
//! This module provides functions for rendering the complete Kanban board
//! with its three lanes arranged horizontally. Rendering the board also
//! registers every lane as a drop zone and records where each card landed.

use lanedrag_protocol::{KanbanBoard, TaskId, TaskStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::lane::{LaneContext, LanePosition, render_lane};
use crate::drop_zone::{CardLayout, DropZone, DropZoneRegistry};
use crate::geometry::Bounds;

/// What the board shows besides its tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardView {
    /// Index of the currently focused lane.
    pub selected_lane: usize,
    /// Index of the selected task within the focused lane, if any.
    pub selected_task: Option<usize>,
    /// Card currently dragged by the pointer.
    pub detached: Option<TaskId>,
    /// Lane a keyboard move would drop into.
    pub drop_target: Option<TaskStatus>,
}

/// Returns the drop-zone id of the lane for `status`.
#[must_use]
pub fn lane_zone_id(status: TaskStatus) -> String {
    format!("lane-{}", status.index())
}

/// Renders the complete Kanban board to the buffer.
///
/// The lanes are laid out left to right in workflow order with equal
/// widths. Before drawing, `zones` and `cards` are cleared; each lane is then
/// registered as a drop zone, in order, and every card drawn is recorded.
///
/// # Layout
///
/// ```text
/// ╭──────────────┬──────────────┬──────────────╮
/// │To Do (2)     │In Progress(1)│Done (0)      │
/// │ Task 1       │ Task 3       │No tasks      │
/// │ Task 2       │              │              │
/// ╰──────────────┴──────────────┴──────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lanedrag_protocol::{KanbanBoard, Task};
/// use lanedrag_tui::drop_zone::{CardLayout, DropZoneRegistry};
/// use lanedrag_tui::widgets::{render_board, BoardView};
///
/// let mut board = KanbanBoard::new();
/// board.add_task(Task::new("Task 1"));
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
/// let mut zones = DropZoneRegistry::new();
/// let mut cards = CardLayout::new();
///
/// render_board(&board, &BoardView::default(), area, &mut buf, &mut zones, &mut cards);
/// assert_eq!(zones.len(), 3);
/// assert_eq!(cards.len(), 1);
/// ```
pub fn render_board(
    board: &KanbanBoard,
    view: &BoardView,
    area: Rect,
    buf: &mut Buffer,
    zones: &mut DropZoneRegistry,
    cards: &mut CardLayout,
) {
    zones.clear();
    cards.clear();

    let statuses = TaskStatus::all();
    let lane_count = statuses.len();
    let lane_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(statuses.map(|_| Constraint::Ratio(1, lane_count as u32)))
        .split(area);

    for (i, (status, lane_area)) in statuses.iter().zip(lane_areas.iter()).enumerate() {
        let is_focused = view.selected_lane == i;
        let ctx = LaneContext {
            is_focused,
            // Only show task selection in focused lane
            selected_idx: view.selected_task.filter(|_| is_focused),
            position: LanePosition::of(i, lane_count),
            prev_focused: i > 0 && view.selected_lane == i - 1,
            is_drop_target: view.drop_target == Some(*status),
            detached: view.detached,
        };

        zones.register(DropZone::new(
            lane_zone_id(*status),
            *status,
            Bounds::from(*lane_area),
        ));
        render_lane(board.lane(*status), &ctx, *lane_area, buf, cards);
    }
}
