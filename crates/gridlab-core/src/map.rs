//! Obstacle maps.
//!
//! [`Map`] is a fixed-size grid of binary cells, `0` for free and `1` for an
//! obstacle. Search routines only need the narrow [`GridMap`] view: its
//! size and whether a (row, column) cell can be entered.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// Cell value for a free cell.
pub const FREE: u8 = 0;
/// Cell value for an obstacle.
pub const OBSTACLE: u8 = 1;

/// Read-only traversability queries used by search routines.
pub trait GridMap {
    /// `(height, width)` of the map.
    fn size(&self) -> (i32, i32);

    /// Whether the cell at (`row`, `col`) can be entered. Cells outside the
    /// map are never traversable.
    fn traversable(&self, row: i32, col: i32) -> bool;

    /// Whether (`row`, `col`) lies inside the map.
    fn in_bounds(&self, row: i32, col: i32) -> bool {
        let (h, w) = self.size();
        row >= 0 && row < h && col >= 0 && col < w
    }
}

/// Error produced while building a [`Map`] from text or rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No non-blank rows were given.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#` or `.`.
    InvalidChar { row: usize, col: usize, ch: char },
    /// A cell value other than 0 or 1.
    InvalidCell { row: usize, col: usize, value: u8 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map has no rows"),
            MapError::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            MapError::InvalidChar { row, col, ch } => {
                write!(f, "unexpected character {ch:?} at row {row}, column {col}")
            }
            MapError::InvalidCell { row, col, value } => {
                write!(f, "unexpected cell value {value} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Convert a textual grid into a binary matrix.
///
/// Each line is one row; whitespace inside a line is ignored, so cells may
/// be separated by spaces. `#` becomes [`OBSTACLE`] and `.` becomes
/// [`FREE`]. Blank lines are skipped. Row order is kept top-to-bottom and
/// column order left-to-right.
pub fn parse_cells(text: &str) -> Result<Vec<Vec<u8>>, MapError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();
    for line in text.lines() {
        let mut row = Vec::new();
        for ch in line.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                '#' => OBSTACLE,
                '.' => FREE,
                _ => {
                    return Err(MapError::InvalidChar {
                        row: rows.len(),
                        col: row.len(),
                        ch,
                    });
                }
            };
            row.push(cell);
        }
        if row.is_empty() {
            continue;
        }
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(MapError::Ragged {
                    row: rows.len(),
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(MapError::Empty);
    }
    Ok(rows)
}

/// A rectangular obstacle map stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    cells: Vec<u8>,
    bounds: Range,
}

impl Map {
    /// Create a map of the given size with every cell free.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            cells: vec![FREE; bounds.len()],
            bounds,
        }
    }

    /// Build a map from rows of 0/1 cells.
    pub fn from_cells(rows: Vec<Vec<u8>>) -> Result<Self, MapError> {
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let width = first.len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MapError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != FREE && value != OBSTACLE {
                    return Err(MapError::InvalidCell { row: r, col: c, value });
                }
                cells.push(value);
            }
        }
        Ok(Self {
            bounds: Range::sized(width as i32, rows.len() as i32),
            cells,
        })
    }

    /// Returns the bounding range of the map (x = column, y = row).
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Raw cell value at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<u8> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, obstacle: bool) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = if obstacle { OBSTACLE } else { FREE };
    }

    /// Whether the point is inside the map and free.
    pub fn passable(&self, p: Point) -> bool {
        self.at(p) == Some(FREE)
    }

    /// Iterate over obstacle positions in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.iter().filter(|&p| self.at(p) == Some(OBSTACLE))
    }

    /// The map as rows of 0/1 cells.
    pub fn to_cells(&self) -> Vec<Vec<u8>> {
        let w = self.width().max(1) as usize;
        self.cells.chunks(w).map(<[u8]>::to_vec).collect()
    }

    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }
}

impl GridMap for Map {
    fn size(&self) -> (i32, i32) {
        (self.height(), self.width())
    }

    fn traversable(&self, row: i32, col: i32) -> bool {
        self.passable(Point::at(row, col))
    }
}

impl FromStr for Map {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Map::from_cells(parse_cells(s)?)
    }
}

/// Renders the map back in the `#`/`.` text format.
impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_cells() {
            let line: Vec<&str> = row
                .iter()
                .map(|&c| if c == OBSTACLE { "#" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
