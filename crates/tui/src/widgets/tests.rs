//! Rendering tests that combine several widgets.

use lanedrag_config::FeedbackConfig;
use lanedrag_protocol::dummy::dummy_board;
use lanedrag_protocol::{KanbanBoard, Task, TaskStatus};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::{
    BoardView, StatusHints, lane_zone_id, render_board, render_help_overlay, render_lifted_card,
    render_status_bar, render_task_card,
};
use crate::drop_zone::{CardLayout, DropZoneRegistry};
use crate::gesture::{CardVisual, Placement};
use crate::test_utils::{buffer_to_string, row_text};

fn render(board: &KanbanBoard, view: &BoardView, area: Rect) -> (Buffer, DropZoneRegistry, CardLayout) {
    let mut buf = Buffer::empty(area);
    let mut zones = DropZoneRegistry::new();
    let mut cards = CardLayout::new();
    render_board(board, view, area, &mut buf, &mut zones, &mut cards);
    (buf, zones, cards)
}

#[test]
fn snapshot_task_card_in_progress() {
    let task = Task::new("Implement parser")
        .with_description("Build JSON parser module")
        .with_status(TaskStatus::InProgress);
    let area = Rect::new(0, 0, 20, 5);
    let mut buf = Buffer::empty(area);

    render_task_card(&task, false, area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭──────────────────╮
    │Implement parser  │
    │Build JSON pars...│
    │ In Progress      │
    ╰──────────────────╯
    ");
}

#[test]
fn sample_board_shows_every_lane() {
    let board = dummy_board();
    let (buf, zones, cards) = render(&board, &BoardView::default(), Rect::new(0, 0, 100, 24));

    assert_eq!(row_text(&buf, 0).matches("(").count(), 3);
    let content = buffer_to_string(&buf);
    assert!(content.contains("To Do (3)"));
    assert!(content.contains("In Progress (2)"));
    assert!(content.contains("Done (1)"));
    assert!(!content.contains("No tasks"));

    assert_eq!(zones.len(), 3);
    assert_eq!(cards.len(), board.total_tasks());
}

#[test]
fn drop_target_lane_uses_accent() {
    let board = dummy_board();
    let view = BoardView {
        drop_target: Some(TaskStatus::Done),
        ..BoardView::default()
    };
    let (buf, zones, _) = render(&board, &view, Rect::new(0, 0, 90, 20));

    let done = zones
        .get(&lane_zone_id(TaskStatus::Done))
        .expect("done lane should be registered");
    let corner = buf
        .cell((done.bounds.left as u16, done.bounds.top as u16))
        .expect("cell should exist");
    assert_eq!(corner.fg, Color::Yellow);
}

#[test]
fn dragged_card_is_drawn_once_over_the_board() {
    let board = dummy_board();
    let dragged = board.lane(TaskStatus::ToDo).tasks[0].clone();
    let view = BoardView {
        detached: Some(dragged.id),
        ..BoardView::default()
    };
    let screen = Rect::new(0, 0, 90, 20);
    let (mut buf, _, cards) = render(&board, &view, screen);

    let slot = cards.area(dragged.id).expect("detached card stays mounted");
    let visual = CardVisual {
        placement: Placement::Fixed { x: 35, y: 8 },
        ..CardVisual::lifted(&FeedbackConfig::default())
    };
    render_lifted_card(&dragged, &visual, slot, screen, &mut buf);

    let content = buffer_to_string(&buf);
    assert_eq!(content.matches(dragged.title.as_str()).count(), 1);
    assert!(row_text(&buf, 9).contains(dragged.title.as_str()));
    assert!(content.contains('▒'));
}

#[test]
fn help_overlay_over_board() {
    let board = dummy_board();
    let area = Rect::new(0, 0, 80, 24);
    let (mut buf, _, _) = render(&board, &BoardView::default(), area);

    render_help_overlay(area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Grab selected task"));
    assert!(content.contains("Press any key to close"));
}

#[test]
fn help_overlay_small_terminal() {
    let area = Rect::new(0, 0, 40, 15);
    let mut buf = Buffer::empty(area);

    render_help_overlay(area, &mut buf);

    assert!(buffer_to_string(&buf).contains("Help"));
}

#[test]
fn status_bar_below_board() {
    let area = Rect::new(0, 0, 90, 1);
    let mut buf = Buffer::empty(area);

    render_status_bar(
        Some("Moved \"Set up CI\" to Done"),
        StatusHints::Board,
        area,
        &mut buf,
    );

    assert!(row_text(&buf, 0).starts_with("Moved \"Set up CI\" to Done  |  ←→↑↓ Navigate"));
}
