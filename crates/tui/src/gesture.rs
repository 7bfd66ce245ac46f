//! Pointer drag handling for a single task card.
//!
//! A [`GestureController`] follows one press / drag / release sequence. While
//! the pointer is down the card is lifted off the board and follows the
//! pointer; on release the card drops back into place and the release point
//! is hit-tested against the board's [`DropZoneRegistry`]. If that lands the
//! card on a column with a different status, the [`CardHandler`] is asked to
//! perform the change.
//!
//! ```text
//!           start (mounted)
//!   Idle ───────────────────▶ Active ──┐ move
//!    ▲                          │  ▲   │
//!    └──── end / cancel ────────┘  └───┘
//! ```
//!
//! The controller never touches the board itself. Everything it decides is
//! exposed through [`CardVisual`], which the renderer reads back.

use lanedrag_config::FeedbackConfig;
use lanedrag_protocol::{Task, TaskId, TaskStatus};
use tracing::debug;

use crate::drop_zone::DropZoneRegistry;
use crate::geometry::{Bounds, Point};

/// Stacking order of a card that follows the pointer.
pub const DRAG_Z_INDEX: u16 = 1000;

/// Receives the requests a card makes to the board that owns it.
pub trait CardHandler {
    /// Called when a keyboard (native) drag picks up `task`.
    fn on_drag_start(&mut self, _task: &Task) {}

    /// Called once when a drop moves `task_id` to a different status.
    fn on_status_change(&mut self, task_id: TaskId, status: TaskStatus);
}

/// Where a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// In its slot in the lane.
    #[default]
    InFlow,
    /// Detached from the lane, with its top-left corner at `(x, y)`.
    Fixed {
        /// Column of the top-left corner.
        x: i32,
        /// Row of the top-left corner.
        y: i32,
    },
}

/// Display state of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// Where the card is drawn.
    pub placement: Placement,
    /// Opacity in `(0, 1]`.
    pub opacity: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Whether the card casts a shadow.
    pub shadow: bool,
    /// Stacking order, higher is drawn on top.
    pub z_index: u16,
}

impl Default for CardVisual {
    fn default() -> Self {
        Self::natural()
    }
}

impl CardVisual {
    /// The resting look of a card.
    #[must_use]
    pub const fn natural() -> Self {
        Self {
            placement: Placement::InFlow,
            opacity: 1.0,
            scale: 1.0,
            shadow: false,
            z_index: 0,
        }
    }

    /// The look of a card that has just been picked up.
    #[must_use]
    pub const fn lifted(feedback: &FeedbackConfig) -> Self {
        Self {
            placement: Placement::InFlow,
            opacity: feedback.opacity,
            scale: feedback.scale,
            shadow: feedback.shadow,
            z_index: 0,
        }
    }

    /// Returns `true` if the card is drawn away from its slot.
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        matches!(self.placement, Placement::Fixed { .. })
    }
}

/// Whether a pointer move was handled by the card.
///
/// A consumed move must not scroll the surrounding view. The board app also
/// only tracks the lane under the pointer for consumed moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The card followed the pointer.
    Consumed,
    /// No drag in progress; the event is free for default handling.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GestureSession {
    start: Point,
    origin: Point,
}

/// Tracks one pointer drag of one card.
///
/// # Examples
///
/// ```
/// use lanedrag_config::FeedbackConfig;
/// use lanedrag_protocol::{Task, TaskId, TaskStatus};
/// use lanedrag_tui::drop_zone::{DropZone, DropZoneRegistry};
/// use lanedrag_tui::geometry::{Bounds, Point};
/// use lanedrag_tui::gesture::{CardHandler, GestureController};
///
/// struct Record(Vec<(TaskId, TaskStatus)>);
///
/// impl CardHandler for Record {
///     fn on_status_change(&mut self, task_id: TaskId, status: TaskStatus) {
///         self.0.push((task_id, status));
///     }
/// }
///
/// let task = Task::new("Write docs");
/// let card = Some(Bounds::new(1, 4, 18, 8));
///
/// let mut zones = DropZoneRegistry::new();
/// zones.register(DropZone::new("lane-1", TaskStatus::InProgress, Bounds::new(20, 3, 39, 29)));
///
/// let mut gesture = GestureController::new(FeedbackConfig::default());
/// let mut handler = Record(Vec::new());
///
/// gesture.start(Point::new(5, 5), card);
/// gesture.on_move(Point::new(25, 6), card);
/// gesture.end(Point::new(25, 6), card, &task, &zones, &mut handler);
///
/// assert_eq!(handler.0, vec![(task.id, TaskStatus::InProgress)]);
/// assert!(!gesture.is_active());
/// ```
#[derive(Debug, Clone)]
pub struct GestureController {
    session: Option<GestureSession>,
    visual: CardVisual,
    feedback: FeedbackConfig,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(FeedbackConfig::default())
    }
}

impl GestureController {
    /// Creates an idle controller that lifts cards with `feedback`.
    #[must_use]
    pub fn new(feedback: FeedbackConfig) -> Self {
        Self {
            session: None,
            visual: CardVisual::natural(),
            feedback,
        }
    }

    /// Returns the current display state of the card.
    #[must_use]
    pub fn visual(&self) -> &CardVisual {
        &self.visual
    }

    /// Returns `true` between a start and the matching end or cancel.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begins a drag at `point`.
    ///
    /// `card` is the card's current on-screen bounds, or `None` if it is not
    /// mounted, in which case nothing happens. Returns whether a drag began.
    pub fn start(&mut self, point: Point, card: Option<Bounds>) -> bool {
        let Some(card) = card else {
            return false;
        };

        self.session = Some(GestureSession {
            start: point,
            origin: card.origin(),
        });
        self.visual = CardVisual::lifted(&self.feedback);
        debug!(x = point.x, y = point.y, "card picked up");
        true
    }

    /// Moves the card to follow the pointer.
    ///
    /// The card's top-left corner is placed at its original position plus
    /// the pointer's displacement since the start.
    pub fn on_move(&mut self, point: Point, card: Option<Bounds>) -> Disposition {
        let (Some(session), Some(_)) = (self.session, card) else {
            return Disposition::Ignored;
        };

        let position = session.origin + (point - session.start);
        self.visual.placement = Placement::Fixed {
            x: position.x,
            y: position.y,
        };
        self.visual.z_index = DRAG_Z_INDEX;
        Disposition::Consumed
    }

    /// Drops the card at `point`.
    ///
    /// Nothing happens if the card is not mounted. Otherwise the card is put
    /// back in place, the drag ends, and if `point` resolves to a status
    /// other than `task.status`, `handler` is notified once. Returns the
    /// status that was requested, if any.
    pub fn end<H>(
        &mut self,
        point: Point,
        card: Option<Bounds>,
        task: &Task,
        zones: &DropZoneRegistry,
        handler: &mut H,
    ) -> Option<TaskStatus>
    where
        H: CardHandler + ?Sized,
    {
        card?;

        self.visual = CardVisual::natural();
        self.session = None;

        let target = zones.resolve(point).filter(|status| *status != task.status);
        match target {
            Some(status) => {
                debug!(task = %task.id, to = %status, "card dropped on another column");
                handler.on_status_change(task.id, status);
            }
            None => debug!(task = %task.id, "card dropped without a status change"),
        }
        target
    }

    /// Abandons the drag without requesting anything.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("drag cancelled");
        }
        self.visual = CardVisual::natural();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drop_zone::DropZone;
    use proptest::prelude::*;

    #[derive(Default)]
    struct Recorder {
        changes: Vec<(TaskId, TaskStatus)>,
    }

    impl CardHandler for Recorder {
        fn on_status_change(&mut self, task_id: TaskId, status: TaskStatus) {
            self.changes.push((task_id, status));
        }
    }

    const CARD: Bounds = Bounds::new(2, 5, 19, 9);

    fn board_zones() -> DropZoneRegistry {
        let mut zones = DropZoneRegistry::new();
        zones.register(DropZone::new("lane-0", TaskStatus::ToDo, Bounds::new(0, 3, 21, 29)));
        zones.register(DropZone::new("lane-1", TaskStatus::InProgress, Bounds::new(22, 3, 43, 29)));
        zones.register(DropZone::new("lane-2", TaskStatus::Done, Bounds::new(44, 3, 65, 29)));
        zones
    }

    #[test]
    fn default_drag_start_is_silent() {
        let mut recorder = Recorder::default();
        recorder.on_drag_start(&Task::new("Task"));
        assert!(recorder.changes.is_empty());
    }

    #[test]
    fn start_without_mounted_card_is_noop() {
        let mut gesture = GestureController::default();
        assert!(!gesture.start(Point::new(3, 6), None));
        assert!(!gesture.is_active());
        assert_eq!(*gesture.visual(), CardVisual::natural());
    }

    #[test]
    fn start_lifts_card() {
        let mut gesture = GestureController::default();
        assert!(gesture.start(Point::new(3, 6), Some(CARD)));
        assert!(gesture.is_active());

        let visual = gesture.visual();
        assert_eq!(visual.opacity, 0.8);
        assert_eq!(visual.scale, 1.05);
        assert!(visual.shadow);
        assert_eq!(visual.placement, Placement::InFlow);
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut gesture = GestureController::default();
        assert_eq!(gesture.on_move(Point::new(9, 9), Some(CARD)), Disposition::Ignored);
        assert_eq!(*gesture.visual(), CardVisual::natural());
    }

    #[test]
    fn move_without_mounted_card_is_ignored() {
        let mut gesture = GestureController::default();
        gesture.start(Point::new(3, 6), Some(CARD));
        assert_eq!(gesture.on_move(Point::new(9, 9), None), Disposition::Ignored);
        assert!(!gesture.visual().is_detached());
    }

    #[test]
    fn move_detaches_card_at_offset() {
        let mut gesture = GestureController::default();
        gesture.start(Point::new(3, 6), Some(CARD));

        assert_eq!(gesture.on_move(Point::new(10, 4), Some(CARD)), Disposition::Consumed);
        insta::assert_debug_snapshot!(gesture.visual(), @r"
        CardVisual {
            placement: Fixed {
                x: 9,
                y: 3,
            },
            opacity: 0.8,
            scale: 1.05,
            shadow: true,
            z_index: 1000,
        }
        ");
    }

    #[test]
    fn start_then_end_without_move_restores_visual() {
        let task = Task::new("Task");
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        let target = gesture.end(Point::new(3, 6), Some(CARD), &task, &board_zones(), &mut recorder);

        assert_eq!(target, None);
        assert_eq!(*gesture.visual(), CardVisual::natural());
        assert!(!gesture.is_active());
        assert!(recorder.changes.is_empty());
    }

    #[test]
    fn end_on_other_column_requests_change_once() {
        let task = Task::new("Task");
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.on_move(Point::new(30, 8), Some(CARD));
        let target = gesture.end(Point::new(30, 8), Some(CARD), &task, &board_zones(), &mut recorder);

        assert_eq!(target, Some(TaskStatus::InProgress));
        assert_eq!(recorder.changes, vec![(task.id, TaskStatus::InProgress)]);
        assert_eq!(*gesture.visual(), CardVisual::natural());
        assert!(!gesture.is_active());
    }

    #[test]
    fn end_on_header_labelled_zone() {
        let task = Task::new("Task");
        let mut zones = DropZoneRegistry::new();
        zones.register(DropZone::from_header(
            "col",
            "In Progress 3 tasks",
            Bounds::new(0, 0, 30, 30),
        ));

        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();
        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.end(Point::new(12, 12), Some(CARD), &task, &zones, &mut recorder);

        assert_eq!(recorder.changes, vec![(task.id, TaskStatus::InProgress)]);
    }

    #[test]
    fn end_on_own_column_emits_nothing() {
        let task = Task::new("Task").with_status(TaskStatus::Done);
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        let target = gesture.end(Point::new(50, 8), Some(CARD), &task, &board_zones(), &mut recorder);

        assert_eq!(target, None);
        assert!(recorder.changes.is_empty());
        assert!(!gesture.is_active());
    }

    #[test]
    fn end_outside_every_zone_emits_nothing() {
        let task = Task::new("Task");
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.on_move(Point::new(70, 1), Some(CARD));
        gesture.end(Point::new(70, 1), Some(CARD), &task, &board_zones(), &mut recorder);

        assert!(recorder.changes.is_empty());
        assert_eq!(*gesture.visual(), CardVisual::natural());
        assert!(!gesture.is_active());
    }

    #[test]
    fn end_without_mounted_card_leaves_session() {
        let task = Task::new("Task");
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.on_move(Point::new(30, 8), Some(CARD));
        let target = gesture.end(Point::new(30, 8), None, &task, &board_zones(), &mut recorder);

        assert_eq!(target, None);
        assert!(recorder.changes.is_empty());
        assert!(gesture.is_active());
        assert!(gesture.visual().is_detached());
    }

    #[test]
    fn overlapping_zones_last_registered_wins() {
        let task = Task::new("Task");
        let mut zones = DropZoneRegistry::new();
        zones.register(DropZone::new("a", TaskStatus::Done, Bounds::new(0, 0, 40, 40)));
        zones.register(DropZone::new("b", TaskStatus::InProgress, Bounds::new(10, 10, 40, 40)));

        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();
        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.end(Point::new(20, 20), Some(CARD), &task, &zones, &mut recorder);

        assert_eq!(recorder.changes, vec![(task.id, TaskStatus::InProgress)]);
    }

    #[test]
    fn column_boundary_splits_between_neighbours() {
        let task = Task::new("Task").with_status(TaskStatus::Done);
        let zones = board_zones();
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.end(Point::new(21, 8), Some(CARD), &task, &zones, &mut recorder);
        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.end(Point::new(22, 8), Some(CARD), &task, &zones, &mut recorder);

        assert_eq!(
            recorder.changes,
            vec![(task.id, TaskStatus::ToDo), (task.id, TaskStatus::InProgress)]
        );
    }

    #[test]
    fn end_below_every_column_emits_nothing() {
        let task = Task::new("Task");
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.end(Point::new(30, 30), Some(CARD), &task, &board_zones(), &mut recorder);

        assert!(recorder.changes.is_empty());
    }

    #[test]
    fn cancel_restores_and_never_emits() {
        let task = Task::new("Task");
        let mut gesture = GestureController::default();
        let mut recorder = Recorder::default();

        gesture.start(Point::new(3, 6), Some(CARD));
        gesture.on_move(Point::new(30, 8), Some(CARD));
        gesture.cancel();

        assert!(!gesture.is_active());
        assert_eq!(*gesture.visual(), CardVisual::natural());
        assert_eq!(gesture.on_move(Point::new(31, 8), Some(CARD)), Disposition::Ignored);
        assert!(!gesture.visual().is_detached());

        // A release after a cancel still hit-tests, but nothing was dragged.
        gesture.end(Point::new(3, 6), Some(CARD), &task, &board_zones(), &mut recorder);
        assert!(recorder.changes.is_empty());
    }

    #[test]
    fn feedback_follows_configuration() {
        let mut gesture = GestureController::new(FeedbackConfig::none());
        gesture.start(Point::new(3, 6), Some(CARD));

        let visual = gesture.visual();
        assert_eq!(visual.opacity, 1.0);
        assert_eq!(visual.scale, 1.0);
        assert!(!visual.shadow);
    }

    proptest! {
        #[test]
        fn placement_tracks_pointer_displacement(
            start in (2i32..20, 5i32..10),
            moves in prop::collection::vec((-50i32..200, -50i32..100), 1..20),
        ) {
            let mut gesture = GestureController::default();
            let start = Point::new(start.0, start.1);
            gesture.start(start, Some(CARD));

            for (x, y) in moves {
                let point = Point::new(x, y);
                prop_assert_eq!(gesture.on_move(point, Some(CARD)), Disposition::Consumed);

                let expected = CARD.origin() + (point - start);
                prop_assert_eq!(
                    gesture.visual().placement,
                    Placement::Fixed { x: expected.x, y: expected.y }
                );
                prop_assert_eq!(gesture.visual().z_index, DRAG_Z_INDEX);
            }
        }
    }
}
