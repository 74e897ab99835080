//! The [`Dispatcher`]: terrain, start/end roles and the current click mode.
//!
//! A front end forwards cell clicks and button presses here and draws
//! whatever state comes back. Nothing is global; each dispatcher owns its
//! grid and markers.

use std::time::Duration;

use roadgrid_core::{Coord, MapText, Terrain, TerrainGrid};
use roadgrid_paths::{PathEngine, Search, SearchOptions};

use crate::error::DispatchError;
use crate::playback::{DEFAULT_INTERVAL, Playback};

/// What a click on a cell does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Move the start marker (the vehicle) to the clicked cell.
    #[default]
    SetStart,
    /// Move the end marker (the destination) to the clicked cell.
    SetEnd,
    /// Block the clicked cell, removing any marker on it.
    Delete,
}

/// Grid state plus the markers a front end places on it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    grid: TerrainGrid,
    mode: Mode,
    start: Option<Coord>,
    end: Option<Coord>,
    engine: PathEngine,
    interval: Duration,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(TerrainGrid::default())
    }
}

impl Dispatcher {
    /// Create a dispatcher over `grid` with no markers placed.
    pub fn new(grid: TerrainGrid) -> Self {
        Self {
            grid,
            mode: Mode::default(),
            start: None,
            end: None,
            engine: PathEngine::default(),
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Create a dispatcher from a parsed map, markers included.
    pub fn from_map(map: MapText) -> Self {
        let mut d = Self::new(map.grid);
        d.start = map.start;
        d.end = map.end;
        d
    }

    /// Use `options` for every subsequent run (builder).
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.engine = PathEngine::new(options);
        self
    }

    /// Suggested delay between playback steps (builder).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[inline]
    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn set_mode(&mut self, mode: Mode) {
        log::debug!("mode {:?} -> {mode:?}", self.mode);
        self.mode = mode;
    }

    /// Apply the current mode to the cell at `c`.
    ///
    /// Markers leave a cell's terrain alone. Deleting removes whichever
    /// markers sit on the cell, then blocks it.
    pub fn click(&mut self, c: Coord) -> Result<(), DispatchError> {
        self.grid.check(c)?;
        match self.mode {
            Mode::SetStart => {
                log::info!("start placed at {c}");
                self.start = Some(c);
            }
            Mode::SetEnd => {
                log::info!("end placed at {c}");
                self.end = Some(c);
            }
            Mode::Delete => {
                if self.start == Some(c) {
                    log::info!("start removed from {c}");
                    self.start = None;
                }
                if self.end == Some(c) {
                    log::info!("end removed from {c}");
                    self.end = None;
                }
                self.grid.set_state(c, Terrain::Blocked)?;
            }
        }
        Ok(())
    }

    /// Classify the cell at `c` as road.
    pub fn mark_road(&mut self, c: Coord) -> Result<(), DispatchError> {
        self.set_state(c, Terrain::Road)
    }

    /// Reclassify the cell at `c`. Markers are unaffected.
    pub fn set_state(&mut self, c: Coord, state: Terrain) -> Result<(), DispatchError> {
        self.grid.set_state(c, state)?;
        Ok(())
    }

    /// Search for a route from the start marker to the end marker.
    ///
    /// Returns `Ok(None)` when the end cannot be reached.
    pub fn run(&self) -> Result<Option<Playback>, DispatchError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::warn!("run requested without both markers placed");
            return Err(DispatchError::MissingEndpoints {
                start: self.start,
                end: self.end,
            });
        };
        match self.engine.shortest_path(&self.grid, start, end)? {
            Search::Found(route) => {
                log::info!(
                    "dispatching {start} -> {end}: {} steps, cost {}",
                    route.len() - 1,
                    route.cost()
                );
                Ok(Some(Playback::new(route).with_interval(self.interval)))
            }
            Search::Unreachable => {
                log::warn!("no route from {start} to {end}");
                Ok(None)
            }
        }
    }

    /// The grid as map text, markers included.
    pub fn render(&self) -> String {
        MapText {
            grid: self.grid.clone(),
            start: self.start,
            end: self.end,
        }
        .render()
    }
}
