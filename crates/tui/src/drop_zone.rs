//! Drop zones and card placement.
//!
//! Every board render refills two registries: one drop zone per column, and
//! the on-screen bounds of every card that was drawn. Gesture handling reads
//! them back on the next input event.

use lanedrag_protocol::{TaskId, TaskStatus};
use ratatui::layout::{Position, Rect};

use crate::geometry::{Bounds, Point};

/// A screen region that accepts dropped cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    /// Stable identifier of the region, e.g. `lane-1`.
    pub id: String,
    /// Label text the target status is read from.
    pub label: String,
    /// Screen bounds of the region.
    pub bounds: Bounds,
}

impl DropZone {
    /// Creates a zone labeled with an explicit status.
    #[must_use]
    pub fn new(id: impl Into<String>, status: TaskStatus, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            label: status.label().to_string(),
            bounds,
        }
    }

    /// Creates a zone from free-form column header text.
    ///
    /// The header must start with a status label, optionally followed by
    /// whitespace and anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_protocol::TaskStatus;
    /// use lanedrag_tui::drop_zone::DropZone;
    /// use lanedrag_tui::geometry::Bounds;
    ///
    /// let zone = DropZone::from_header("col", "In Progress 3 tasks", Bounds::new(0, 0, 10, 10));
    /// assert_eq!(zone.status(), Some(TaskStatus::InProgress));
    ///
    /// let zone = DropZone::from_header("col", "Archive", Bounds::new(0, 0, 10, 10));
    /// assert_eq!(zone.status(), None);
    /// ```
    #[must_use]
    pub fn from_header(id: impl Into<String>, header: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: id.into(),
            label: header.into(),
            bounds,
        }
    }

    /// Returns the status this zone stands for, if its label names one.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        TaskStatus::from_header_text(&self.label)
    }
}

/// Drop zones in registration order.
///
/// # Examples
///
/// ```
/// use lanedrag_protocol::TaskStatus;
/// use lanedrag_tui::drop_zone::{DropZone, DropZoneRegistry};
/// use lanedrag_tui::geometry::{Bounds, Point};
///
/// let mut zones = DropZoneRegistry::new();
/// zones.register(DropZone::new("lane-0", TaskStatus::ToDo, Bounds::new(0, 0, 19, 29)));
/// zones.register(DropZone::new("lane-1", TaskStatus::InProgress, Bounds::new(20, 0, 39, 29)));
///
/// assert_eq!(zones.resolve(Point::new(5, 5)), Some(TaskStatus::ToDo));
/// assert_eq!(zones.resolve(Point::new(19, 5)), Some(TaskStatus::ToDo));
/// assert_eq!(zones.resolve(Point::new(20, 5)), Some(TaskStatus::InProgress));
/// assert_eq!(zones.resolve(Point::new(20, 30)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropZoneRegistry {
    zones: Vec<DropZone>,
}

impl DropZoneRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a zone.
    pub fn register(&mut self, zone: DropZone) {
        self.zones.push(zone);
    }

    /// Removes every zone.
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Returns the number of registered zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if no zone is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates over the zones in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DropZone> {
        self.zones.iter()
    }

    /// Returns the zone registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DropZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Resolves the status under `point`.
    ///
    /// Every zone containing the point (edges included) is checked in
    /// registration order. The last one whose label names a status wins;
    /// zones with unrecognized labels are skipped.
    #[must_use]
    pub fn resolve(&self, point: Point) -> Option<TaskStatus> {
        self.zones
            .iter()
            .filter(|zone| zone.bounds.contains_inclusive(point))
            .filter_map(DropZone::status)
            .last()
    }
}

/// Where each card was drawn by the last render.
///
/// A card is mounted while it has an entry here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLayout {
    cards: Vec<(TaskId, Rect)>,
}

impl CardLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a card was drawn.
    pub fn insert(&mut self, id: TaskId, area: Rect) {
        self.cards.push((id, area));
    }

    /// Forgets every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of mounted cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if no card is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cell area of a mounted card.
    #[must_use]
    pub fn area(&self, id: TaskId) -> Option<Rect> {
        self.cards
            .iter()
            .find(|(card, _)| *card == id)
            .map(|(_, area)| *area)
    }

    /// Returns the bounding box of a mounted card.
    #[must_use]
    pub fn bounds(&self, id: TaskId) -> Option<Bounds> {
        self.area(id).map(Bounds::from)
    }

    /// Returns the card drawn at a terminal cell.
    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<TaskId> {
        let position = Position::new(column, row);
        self.cards
            .iter()
            .rev()
            .find(|(_, area)| area.contains(position))
            .map(|(id, _)| *id)
    }
}
