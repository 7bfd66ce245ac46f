//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use lanedrag_config::{Config, board_store};
use lanedrag_protocol::{KanbanBoard, Message, Task, TaskId, TaskStatus};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{debug, info, warn};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    geometry::Point,
    gesture::{CardHandler, CardVisual, Disposition, GestureController},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT},
    state::ActiveGesture,
    terminal::AppTerminal,
    widgets::{
        BoardView, StatusHints, render_board, render_help_overlay, render_lifted_card,
        render_status_bar,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop. The app
/// is the [`CardHandler`] of every card on the board: drops that change a
/// task's status come back here to move the task.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Whether the header was shown in the last render.
    header_visible: bool,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application with the given Kanban board.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::KanbanBoard;
    /// use lanedrag_tui::App;
    ///
    /// let board = KanbanBoard::new();
    /// let app = App::new(board);
    /// ```
    #[must_use]
    pub fn new(board: KanbanBoard) -> Self {
        Self::with_config(board, Config::default())
    }

    /// Creates a new application with the given Kanban board and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_config::Config;
    /// use lanedrag_protocol::KanbanBoard;
    /// use lanedrag_tui::App;
    ///
    /// let board = KanbanBoard::new();
    /// let config = Config::default();
    /// let app = App::with_config(board, config);
    /// ```
    #[must_use]
    pub fn with_config(board: KanbanBoard, config: Config) -> Self {
        Self {
            state: AppState::new(board),
            should_quit: false,
            header_visible: true,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user has asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, keys dismiss it instead of taking
    /// their normal action. `Quit` always quits.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Pointer motion and focus changes are not keypresses.
                Message::PointerDrag { .. } | Message::PointerUp { .. } | Message::CancelGesture => {}
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::ToggleHelp => {
                self.cancel_gesture();
                self.state.toggle_help();
            }
            Message::Escape => self.escape(),
            Message::NavigateLeft => {
                if self.state.grab.is_some() {
                    self.state.step_grab_target(false);
                } else {
                    self.state.navigate_left();
                }
            }
            Message::NavigateRight => {
                if self.state.grab.is_some() {
                    self.state.step_grab_target(true);
                } else {
                    self.state.navigate_right();
                }
            }
            Message::NavigateUp => {
                if self.state.grab.is_none() {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => {
                if self.state.grab.is_none() {
                    self.state.navigate_down();
                }
            }
            Message::Grab => self.grab_selected(),
            Message::Drop => self.drop_grabbed(),
            Message::PointerDown { column, row } => self.pointer_down(column, row),
            Message::PointerDrag { column, row } => self.pointer_drag(column, row),
            Message::PointerUp { column, row } => self.pointer_up(column, row),
            Message::CancelGesture => self.cancel_gesture(),
        }
    }

    /// Contextual escape: abandon a drag, then a keyboard move, then the
    /// selection.
    fn escape(&mut self) {
        if self.state.gesture.is_some() {
            self.cancel_gesture();
        } else if self.state.grab.take().is_some() {
            self.state.status_message = Some("Move cancelled".to_string());
        } else {
            self.state.clear_selection();
        }
    }

    /// Starts a pointer drag if the press lands on a mounted card.
    ///
    /// A press replaces any drag whose release was never seen.
    fn pointer_down(&mut self, column: u16, row: u16) {
        let Some(task_id) = self.state.cards.card_at(column, row) else {
            return;
        };

        self.state.grab = None;
        self.state.select_task(task_id);

        let mut controller = GestureController::new(self.config.feedback);
        if !controller.start(Point::from_cell(column, row), self.state.cards.bounds(task_id)) {
            return;
        }
        self.state.gesture = Some(ActiveGesture {
            task_id,
            controller,
            hover: None,
        });

        if let Some(task) = self.state.board.get_task(task_id).cloned() {
            self.on_drag_start(&task);
        }
    }

    /// Moves the dragged card and tracks the lane under the pointer.
    fn pointer_drag(&mut self, column: u16, row: u16) {
        let Some(gesture) = self.state.gesture.as_mut() else {
            return;
        };
        let point = Point::from_cell(column, row);
        let card = self.state.cards.bounds(gesture.task_id);
        match gesture.controller.on_move(point, card) {
            Disposition::Consumed => gesture.hover = self.state.zones.resolve(point),
            Disposition::Ignored => {}
        }
    }

    /// Ends the pointer drag at the release point.
    fn pointer_up(&mut self, column: u16, row: u16) {
        let task = self.state.dragged_task().cloned();
        let Some(mut gesture) = self.state.gesture.take() else {
            return;
        };
        let Some(task) = task else {
            debug!(task = %gesture.task_id, "dragged task left the board");
            return;
        };

        let card = self.state.cards.bounds(gesture.task_id);
        let zones = std::mem::take(&mut self.state.zones);
        gesture
            .controller
            .end(Point::from_cell(column, row), card, &task, &zones, self);
        self.state.zones = zones;

        // An unmounted card keeps its session until it is mounted again.
        if gesture.controller.is_active() {
            self.state.gesture = Some(gesture);
        } else if self.state.board.get_task(task.id).map(|t| t.status) == Some(task.status) {
            self.state.status_message = None;
        }
    }

    fn cancel_gesture(&mut self) {
        if let Some(mut gesture) = self.state.gesture.take() {
            gesture.controller.cancel();
            self.state.status_message = Some("Drag cancelled".to_string());
        }
    }

    fn grab_selected(&mut self) {
        if self.state.gesture.is_some() || !self.state.begin_grab() {
            return;
        }
        if let Some(task) = self.state.selected_task().cloned() {
            self.on_drag_start(&task);
        }
    }

    fn drop_grabbed(&mut self) {
        let Some(grab) = self.state.grab.take() else {
            return;
        };
        let current = self.state.board.get_task(grab.task_id).map(|task| task.status);
        if current.is_some_and(|status| status != grab.target) {
            self.on_status_change(grab.task_id, grab.target);
        } else {
            self.state.status_message = None;
        }
    }

    /// Moves a task to `status`, keeps it selected and saves the board.
    ///
    /// A failed save is reported but the move stands.
    fn apply_status_change(&mut self, task_id: TaskId, status: TaskStatus) {
        if let Err(err) = self.state.board.try_move_task(task_id, status) {
            warn!(error = %err, "status change ignored");
            return;
        }
        self.state.select_task(task_id);

        let title = self
            .state
            .board
            .get_task(task_id)
            .map(|task| task.title.clone())
            .unwrap_or_default();
        info!(task = %task_id, to = %status, "task moved");

        let mut message = format!("Moved \"{title}\" to {status}");
        if let Some(path) = self.config.board_file.as_deref()
            && let Err(err) = board_store::save_board(path, &self.state.board)
        {
            warn!(error = %err, "failed to save board");
            message = format!("{message} (not saved: {err})");
        }
        self.state.status_message = Some(message);
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    ///
    /// Rendering refreshes the drop zones and card areas that pointer events
    /// are resolved against.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.state.cards.clear();
            self.state.zones.clear();
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .split(area);

            self.render_header(frame, chunks[0]);
            chunks[1]
        } else {
            area
        };

        let [board_area, status_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(content_area);

        let view = self.board_view();
        let hints = if self.state.grab.is_some() {
            StatusHints::Moving
        } else {
            StatusHints::Board
        };

        let buf = frame.buffer_mut();
        render_board(
            &self.state.board,
            &view,
            board_area,
            buf,
            &mut self.state.zones,
            &mut self.state.cards,
        );
        render_status_bar(
            self.state.status_message.as_deref(),
            hints,
            status_area,
            buf,
        );
        self.render_dragged_card(area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    fn board_view(&self) -> BoardView {
        let detached = self
            .state
            .gesture
            .as_ref()
            .filter(|gesture| gesture.controller.visual().is_detached())
            .map(|gesture| gesture.task_id);

        let hovered = self.state.gesture.as_ref().and_then(|gesture| gesture.hover);
        let home = self.state.dragged_task().map(|task| task.status);
        let drop_target = match self.state.grab {
            Some(grab) => Some(grab.target),
            None => hovered.filter(|status| Some(*status) != home),
        };

        BoardView {
            selected_lane: self.state.selected_lane,
            selected_task: self.state.selected_task,
            detached,
            drop_target,
        }
    }

    /// Draws the card being dragged on top of the board.
    fn render_dragged_card(&self, screen: Rect, buf: &mut Buffer) {
        let Some(gesture) = &self.state.gesture else {
            return;
        };
        let visual = gesture.controller.visual();
        if *visual == CardVisual::natural() {
            return;
        }
        let (Some(task), Some(slot)) = (
            self.state.dragged_task(),
            self.state.cards.area(gesture.task_id),
        ) else {
            return;
        };
        render_lifted_card(task, visual, slot, screen, buf);
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lanedrag_protocol::KanbanBoard;
    /// use lanedrag_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal(true)?;
    ///     let mut app = App::new(KanbanBoard::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "lanedrag",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

impl CardHandler for App {
    fn on_drag_start(&mut self, task: &Task) {
        debug!(task = %task.id, "move started");
        self.state.status_message = Some(format!("Moving \"{}\"", task.title));
    }

    fn on_status_change(&mut self, task_id: TaskId, status: TaskStatus) {
        self.apply_status_change(task_id, status);
    }
}
