//! Grid positions and rectangular bounds.
//!
//! `x` is the column and grows right, `y` is the row and grows down. Search
//! routines talk in (row, column) pairs, so [`Point::at`], [`Point::row`]
//! and [`Point::col`] do the translation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A cell position on the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Point at column `x`, row `y`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point at (`row`, `col`).
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major: rows first, then columns.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Displays as `(row, col)`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
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

/// Half-open rectangle: `min` is inside, `max` is one past the last cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range anchored at the origin. Negative sizes are clamped to zero.
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point of the range in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Point::new(x, y)))
    }
}
