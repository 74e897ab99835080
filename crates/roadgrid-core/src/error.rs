//! Error types for grid access and map parsing.

use thiserror::Error;

use crate::geom::{Bounds, Coord};

/// A coordinate fell outside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate {coord} is outside the {bounds} grid")]
    OutOfRange { coord: Coord, bounds: Bounds },
}

/// Errors that can occur when parsing map text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map: no cells")]
    Empty,

    #[error("map: line {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },

    #[error("map contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Coord },

    #[error("map marks more than one {marker} cell (second at {pos})")]
    DuplicateMarker { marker: char, pos: Coord },
}
