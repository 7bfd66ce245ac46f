//! Screen-space points and bounding boxes.
//!
//! Terminal cells are addressed with `u16`, but a dragged card can be pushed
//! past the top or left edge of the screen, so gesture math runs on signed
//! coordinates.

use std::ops::{Add, Sub};

use ratatui::layout::Rect;

/// A point (or displacement) in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point from a terminal cell position.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_tui::geometry::Point;
    ///
    /// assert_eq!(Point::from_cell(4, 7), Point::new(4, 7));
    /// ```
    #[must_use]
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self {
            x: i32::from(column),
            y: i32::from(row),
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned bounding box in terminal cell coordinates.
///
/// `right` and `bottom` are the last column and row inside the box, so two
/// adjacent boxes never share a cell. A box built from an empty `Rect` has
/// `right < left` (or `bottom < top`) and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// First column.
    pub left: i32,
    /// First row.
    pub top: i32,
    /// Last column.
    pub right: i32,
    /// Last row.
    pub bottom: i32,
}

impl Bounds {
    /// Creates a bounding box from its first and last cells.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Returns the height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Returns whether `point` lies inside the box or on any of its edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanedrag_tui::geometry::{Bounds, Point};
    ///
    /// let bounds = Bounds::new(0, 0, 10, 5);
    /// assert!(bounds.contains_inclusive(Point::new(10, 5)));
    /// assert!(!bounds.contains_inclusive(Point::new(11, 5)));
    /// ```
    #[must_use]
    pub const fn contains_inclusive(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        let left = i32::from(rect.x);
        let top = i32::from(rect.y);
        Self::new(
            left,
            top,
            left + i32::from(rect.width) - 1,
            top + i32::from(rect.height) - 1,
        )
    }
}
