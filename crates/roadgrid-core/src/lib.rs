//! **roadgrid-core** — the terrain model behind road-grid routing.
//!
//! This crate provides the types every other *roadgrid* crate builds on:
//! `(row, col)` coordinates, the three terrain states and their entry
//! costs, a dense [`TerrainGrid`] with neighbour and edge-cost queries, and
//! a small text format for describing grids.

pub mod error;
pub mod geom;
pub mod grid;
pub mod map;
pub mod terrain;

pub use error::{GridError, MapError};
pub use geom::{Bounds, BoundsIter, Coord, Direction};
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, TerrainGrid};
pub use map::MapText;
pub use terrain::{OPEN_COST, ROAD_COST, Terrain};
