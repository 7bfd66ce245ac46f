//! Application state management.
//!
//! This module defines the core state of the TUI application: the board,
//! selection tracking, the drag in progress, and the hit-test registries
//! filled by the last render.

use lanedrag_protocol::{KanbanBoard, Lane, Task, TaskId, TaskStatus};

use crate::drop_zone::{CardLayout, DropZoneRegistry};
use crate::gesture::GestureController;

/// Number of lanes on the board.
const LANE_COUNT: usize = TaskStatus::all().len();

/// A pointer drag of one card.
#[derive(Debug, Clone)]
pub struct ActiveGesture {
    /// The card being dragged.
    pub task_id: TaskId,
    /// The drag session and the card's visual state.
    pub controller: GestureController,
    /// Lane under the pointer at the last move the card followed.
    pub hover: Option<TaskStatus>,
}

/// A task picked up with the keyboard, waiting to be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardGrab {
    /// The grabbed task.
    pub task_id: TaskId,
    /// Lane the task would be dropped into.
    pub target: TaskStatus,
}

/// The application state.
///
/// Contains all mutable state for the TUI application including
/// the board data, selection tracking, and any move in progress.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The Kanban board being displayed.
    pub board: KanbanBoard,
    /// Index of the currently selected lane (0-2).
    pub selected_lane: usize,
    /// Index of the selected task within the current lane, if any.
    pub selected_task: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The pointer drag in progress, if any.
    pub gesture: Option<ActiveGesture>,
    /// The keyboard move in progress, if any.
    pub grab: Option<KeyboardGrab>,
    /// Last message shown in the status bar.
    pub status_message: Option<String>,
    /// Where each card was drawn by the last render.
    pub cards: CardLayout,
    /// Drop zones registered by the last render.
    pub zones: DropZoneRegistry,
}

impl AppState {
    /// Creates a new application state with the given board.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::KanbanBoard;
    /// use lanedrag_tui::AppState;
    ///
    /// let state = AppState::new(KanbanBoard::new());
    /// assert_eq!(state.selected_lane, 0);
    /// assert!(state.gesture.is_none());
    /// ```
    #[must_use]
    pub fn new(board: KanbanBoard) -> Self {
        Self {
            board,
            selected_lane: 0,
            selected_task: None,
            help_visible: false,
            gesture: None,
            grab: None,
            status_message: None,
            cards: CardLayout::new(),
            zones: DropZoneRegistry::new(),
        }
    }

    /// Returns the status of the selected lane.
    #[must_use]
    pub fn selected_status(&self) -> TaskStatus {
        TaskStatus::from_index(self.selected_lane).unwrap_or_default()
    }

    fn selected_lane_ref(&self) -> &Lane {
        self.board.lane(self.selected_status())
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves the lane selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        self.selected_lane = (self.selected_lane + LANE_COUNT - 1) % LANE_COUNT;
        self.clamp_task_selection();
    }

    /// Moves the lane selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        self.selected_lane = (self.selected_lane + 1) % LANE_COUNT;
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current lane, wrapping to the
    /// bottom.
    pub fn navigate_up(&mut self) {
        let len = self.selected_lane_ref().len();
        self.selected_task = match self.selected_task {
            _ if len == 0 => None,
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the task selection down within the current lane, wrapping to
    /// the top.
    pub fn navigate_down(&mut self) {
        let len = self.selected_lane_ref().len();
        self.selected_task = match self.selected_task {
            _ if len == 0 => None,
            Some(idx) if idx + 1 < len => Some(idx + 1),
            _ => Some(0),
        };
    }

    /// Returns a reference to the currently selected task, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::{KanbanBoard, Task};
    /// use lanedrag_tui::AppState;
    ///
    /// let mut board = KanbanBoard::new();
    /// board.add_task(Task::new("Task 1"));
    ///
    /// let mut state = AppState::new(board);
    /// assert!(state.selected_task().is_none());
    ///
    /// state.navigate_down();
    /// assert_eq!(state.selected_task().map(|t| t.title.as_str()), Some("Task 1"));
    /// ```
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let task_idx = self.selected_task?;
        self.selected_lane_ref().tasks.get(task_idx)
    }

    /// Selects the task with `id`, moving the lane selection to its lane.
    ///
    /// Returns `false` and leaves the selection alone if no such task exists.
    pub fn select_task(&mut self, id: TaskId) -> bool {
        match self.board.locate(id) {
            Some((status, position)) => {
                self.selected_lane = status.index();
                self.selected_task = Some(position);
                true
            }
            None => false,
        }
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Returns the task being dragged by the pointer, if any.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&Task> {
        let gesture = self.gesture.as_ref()?;
        self.board.get_task(gesture.task_id)
    }

    /// Starts a keyboard move of the selected task.
    ///
    /// The target starts at the task's own lane. Returns `false` when no task
    /// is selected.
    pub fn begin_grab(&mut self) -> bool {
        let Some((task_id, target)) = self.selected_task().map(|task| (task.id, task.status))
        else {
            return false;
        };
        self.grab = Some(KeyboardGrab { task_id, target });
        true
    }

    /// Moves the keyboard move's target one lane left or right.
    ///
    /// The target stops at the first and last lanes.
    pub fn step_grab_target(&mut self, forward: bool) {
        if let Some(grab) = self.grab.as_mut() {
            let next = if forward {
                grab.target.next()
            } else {
                grab.target.previous()
            };
            grab.target = next.unwrap_or(grab.target);
        }
    }

    /// Ensures the task selection is valid for the current lane.
    fn clamp_task_selection(&mut self) {
        let len = self.selected_lane_ref().len();
        if len == 0 {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= len
        {
            self.selected_task = Some(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(titles: &[&str]) -> KanbanBoard {
        KanbanBoard::from_tasks(titles.iter().map(|title| Task::new(*title)))
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new(KanbanBoard::new());

        assert_eq!(state.selected_lane, 0);
        assert_eq!(state.selected_task, None);
        assert!(!state.help_visible);
        assert!(state.gesture.is_none());
        assert!(state.grab.is_none());
        assert!(state.status_message.is_none());
        assert!(state.cards.is_empty());
        assert!(state.zones.is_empty());
    }

    #[test]
    fn navigate_left_wraps_around() {
        let mut state = AppState::new(KanbanBoard::new());

        state.navigate_left();
        assert_eq!(state.selected_lane, 2);
        assert_eq!(state.selected_status(), TaskStatus::Done);

        state.navigate_left();
        assert_eq!(state.selected_lane, 1);
    }

    #[test]
    fn navigate_right_wraps_around() {
        let mut state = AppState::new(KanbanBoard::new());

        state.selected_lane = 2;
        state.navigate_right();
        assert_eq!(state.selected_lane, 0);
    }

    #[test]
    fn navigate_up_down_in_empty_lane() {
        let mut state = AppState::new(KanbanBoard::new());

        state.navigate_up();
        assert_eq!(state.selected_task, None);

        state.navigate_down();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn navigate_up_down_with_tasks() {
        let mut state = AppState::new(board_with(&["Task 1", "Task 2", "Task 3"]));

        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));

        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));

        state.navigate_down();
        assert_eq!(state.selected_task, Some(2));

        // Wrap around
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));

        state.navigate_up();
        assert_eq!(state.selected_task, Some(2));
    }

    #[test]
    fn switching_lanes_clamps_selection() {
        let mut board = board_with(&["a", "b", "c"]);
        board.add_task(Task::new("d").with_status(TaskStatus::InProgress));
        let mut state = AppState::new(board);
        state.selected_task = Some(2);

        state.navigate_right();
        assert_eq!(state.selected_task, Some(0));

        state.navigate_right();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn selected_task_returns_none_for_empty_lane() {
        let mut state = AppState::new(KanbanBoard::new());
        state.selected_task = Some(0);

        assert!(state.selected_task().is_none());
    }

    #[test]
    fn select_task_follows_the_task_to_its_lane() {
        let mut board = board_with(&["a"]);
        let done = Task::new("b").with_status(TaskStatus::Done);
        let done_id = done.id;
        board.add_task(done);
        let mut state = AppState::new(board);

        assert!(state.select_task(done_id));
        assert_eq!(state.selected_lane, 2);
        assert_eq!(state.selected_task, Some(0));

        assert!(!state.select_task(TaskId::new_v4()));
        assert_eq!(state.selected_lane, 2);
    }

    #[test]
    fn dismiss_help() {
        let mut state = AppState::new(KanbanBoard::new());

        assert!(!state.dismiss_help());

        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    #[test]
    fn grab_requires_selection() {
        let mut state = AppState::new(board_with(&["a"]));
        assert!(!state.begin_grab());

        state.navigate_down();
        assert!(state.begin_grab());

        let grab = state.grab.expect("grab should be active");
        assert_eq!(grab.target, TaskStatus::ToDo);
    }

    #[test]
    fn grab_target_stops_at_edges() {
        let mut state = AppState::new(board_with(&["a"]));
        state.navigate_down();
        state.begin_grab();

        state.step_grab_target(false);
        assert_eq!(state.grab.map(|g| g.target), Some(TaskStatus::ToDo));

        for _ in 0..4 {
            state.step_grab_target(true);
        }
        assert_eq!(state.grab.map(|g| g.target), Some(TaskStatus::Done));
    }

    #[test]
    fn dragged_task_follows_gesture() {
        let mut state = AppState::new(board_with(&["a"]));
        assert!(state.dragged_task().is_none());

        let id = state.board.lane(TaskStatus::ToDo).tasks[0].id;
        state.gesture = Some(ActiveGesture {
            task_id: id,
            controller: GestureController::default(),
            hover: None,
        });
        assert_eq!(state.dragged_task().map(|t| t.id), Some(id));
    }
}
