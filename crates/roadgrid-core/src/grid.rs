//! A dense terrain grid.
//!
//! [`TerrainGrid`] owns one [`Terrain`] per cell in row-major order. It is a
//! plain value: clone it to take a snapshot, borrow it immutably to search
//! it. Searches take `&TerrainGrid`, so a grid cannot be reclassified while
//! a search over it is running.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Coord};
use crate::terrain::Terrain;

/// Rows in the default grid.
pub const DEFAULT_ROWS: i32 = 6;
/// Columns in the default grid.
pub const DEFAULT_COLS: i32 = 15;

/// A `rows x cols` grid of terrain states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    cells: Vec<Terrain>,
    bounds: Bounds,
}

impl Default for TerrainGrid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl TerrainGrid {
    /// Create a new grid filled with [`Terrain::Open`].
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![Terrain::default(); bounds.len()],
            bounds,
        }
    }

    /// Wrap row-major `cells` covering `bounds`.
    pub(crate) fn from_cells(bounds: Bounds, cells: Vec<Terrain>) -> Self {
        debug_assert_eq!(cells.len(), bounds.len());
        Self { cells, bounds }
    }

    /// The grid's extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Fail with [`GridError::OutOfRange`] unless `c` lies inside the grid.
    #[inline]
    pub fn check(&self, c: Coord) -> Result<usize, GridError> {
        self.bounds.index(c).ok_or(GridError::OutOfRange {
            coord: c,
            bounds: self.bounds,
        })
    }

    /// Terrain at `c`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, c: Coord) -> Option<Terrain> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Reclassify the cell at `c`.
    pub fn set_state(&mut self, c: Coord, state: Terrain) -> Result<(), GridError> {
        let i = self.check(c)?;
        log::trace!("cell {c}: {} -> {state}", self.cells[i]);
        self.cells[i] = state;
        Ok(())
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: Terrain) {
        self.cells.fill(state);
    }

    /// Number of cells currently classified as `state`.
    pub fn count(&self, state: Terrain) -> usize {
        self.cells.iter().filter(|&&t| t == state).count()
    }

    /// In-bounds neighbours of `c` in search order: Right, Down, Left, Up,
    /// Up-Left, Up-Right, Down-Left, Down-Right.
    ///
    /// Blocked neighbours are included; [`edge_cost`](Self::edge_cost)
    /// filters them.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_8()
            .into_iter()
            .filter(move |&n| self.bounds.contains(n))
    }

    /// Append the in-bounds neighbours of `c` to `buf`.
    pub fn neighbors_into(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(self.neighbors(c));
    }

    /// Cost of the edge `from -> to`.
    ///
    /// Only the destination matters: `None` if `to` is blocked or outside
    /// the grid, otherwise the destination terrain's entry cost.
    #[inline]
    pub fn edge_cost(&self, _from: Coord, to: Coord) -> Option<u32> {
        self.state(to)?.entry_cost()
    }

    /// Row-major iterator over `(Coord, Terrain)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for TerrainGrid {
    /// Renders the grid in map-text glyphs, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.bounds.cols.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
        }
        Ok(())
    }
}
