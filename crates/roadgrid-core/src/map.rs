//! Grids described as text.
//!
//! A [`MapText`] parses an ASCII picture of a grid into a [`TerrainGrid`]
//! plus optional start and end markers:
//!
//! ```text
//! S....
//! .===.
//! .#=#E
//! ```
//!
//! `.` is open ground, `=` road and `#` blocked. `S` and `E` mark the start
//! and end cells; both sit on open ground. Lines must all have the same
//! width.

use crate::error::MapError;
use crate::geom::{Bounds, Coord};
use crate::grid::TerrainGrid;
use crate::terrain::Terrain;

/// Start marker glyph.
pub const START_GLYPH: char = 'S';
/// End marker glyph.
pub const END_GLYPH: char = 'E';

/// A parsed map: terrain plus the cells marked as start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapText {
    pub grid: TerrainGrid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

impl MapText {
    /// Parse map text.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed; each
    /// line additionally loses trailing `\r` so files with CRLF endings load.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let rows = lines.len() as i32;
        let cols = lines[0].chars().count() as i32;

        let bounds = Bounds::new(rows, cols);
        let mut cells = Vec::with_capacity(bounds.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let row = row as i32;
            let width = line.chars().count() as i32;
            if width != cols {
                return Err(MapError::InconsistentWidth {
                    row,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Coord::new(row, col as i32);
                cells.push(match ch {
                    START_GLYPH => {
                        place_marker(&mut start, START_GLYPH, pos)?;
                        Terrain::Open
                    }
                    END_GLYPH => {
                        place_marker(&mut end, END_GLYPH, pos)?;
                        Terrain::Open
                    }
                    _ => Terrain::from_glyph(ch).ok_or(MapError::InvalidGlyph { ch, pos })?,
                });
            }
        }

        Ok(Self {
            grid: TerrainGrid::from_cells(bounds, cells),
            start,
            end,
        })
    }

    /// Render back to text, markers included.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.bounds().len() + self.grid.rows() as usize);
        for (c, t) in self.grid.iter() {
            if c.col == 0 && c.row > 0 {
                out.push('\n');
            }
            let ch = if Some(c) == self.start {
                START_GLYPH
            } else if Some(c) == self.end {
                END_GLYPH
            } else {
                t.glyph()
            };
            out.push(ch);
        }
        out
    }
}

fn place_marker(slot: &mut Option<Coord>, marker: char, pos: Coord) -> Result<(), MapError> {
    if slot.is_some() {
        return Err(MapError::DuplicateMarker { marker, pos });
    }
    *slot = Some(pos);
    Ok(())
}
