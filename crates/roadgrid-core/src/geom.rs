//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right, and a [`Bounds`] is the half-open rectangle `0..rows x 0..cols`.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Components are signed so that neighbor offsets can
/// step outside the grid and be rejected by [`Bounds::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// All eight neighbours in search order (see [`Direction::ALL`]).
    ///
    /// Some of them may lie outside any given grid.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        Direction::ALL.map(|d| self + d.offset())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight grid steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Every direction, in the order neighbours are enumerated.
    ///
    /// Searches depend on this order to break ties between equal-cost
    /// routes, so it must not change.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The `(drow, dcol)` step as a coordinate.
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::Right => Coord::new(0, 1),
            Direction::Down => Coord::new(1, 0),
            Direction::Left => Coord::new(0, -1),
            Direction::Up => Coord::new(-1, 0),
            Direction::UpLeft => Coord::new(-1, -1),
            Direction::UpRight => Coord::new(-1, 1),
            Direction::DownLeft => Coord::new(1, -1),
            Direction::DownRight => Coord::new(1, 1),
        }
    }

    /// Whether the step moves along both axes.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid: `rows x cols` cells anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds contain no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if it is outside.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< len()`.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_search_order() {
        let n = Coord::new(1, 1).neighbors_8();
        assert_eq!(
            n,
            [
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn diagonals() {
        let diag: Vec<_> = Direction::ALL
            .iter()
            .filter(|d| d.is_diagonal())
            .collect();
        assert_eq!(diag.len(), 4);
        assert!(!Direction::Right.is_diagonal());
    }

    #[test]
    fn bounds_contains_and_index() {
        let b = Bounds::new(6, 15);
        assert_eq!(b.len(), 90);
        assert!(b.contains(Coord::new(5, 14)));
        assert!(!b.contains(Coord::new(6, 0)));
        assert!(!b.contains(Coord::new(0, -1)));
        assert_eq!(b.index(Coord::new(2, 3)), Some(33));
        assert_eq!(b.coord(33), Coord::new(2, 3));
        assert_eq!(b.index(Coord::new(-1, 3)), None);
    }

    #[test]
    fn negative_bounds_are_empty() {
        let b = Bounds::new(-3, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let b = Bounds::new(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let all: Vec<_> = it.collect();
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[2], Coord::new(0, 2));
        assert_eq!(all[3], Coord::new(1, 0));
        assert_eq!(all[5], Coord::new(1, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
        assert_eq!(Bounds::new(6, 15).to_string(), "6x15");
    }
}
