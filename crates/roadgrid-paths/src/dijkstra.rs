use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use roadgrid_core::{Bounds, Coord, GridError, TerrainGrid};

use crate::error::PathError;
use crate::queue::StablePriorityQueue;
use crate::route::{Route, Search};
use crate::traits::WeightedPather;

/// Sentinel distance of a cell no search has reached.
pub const UNREACHABLE: u64 = u64::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Shared flag for stopping a running search from another thread.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Searches notice it before their next pop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Knobs for a search. The defaults compute the full single-source tree
/// with no way to interrupt it.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Stop as soon as the target is settled. Does not change which route
    /// is returned.
    pub early_exit: bool,
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
}

impl SearchOptions {
    fn interrupted(&self) -> Option<PathError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(PathError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(PathError::DeadlineExceeded);
        }
        None
    }
}

// ---------------------------------------------------------------------------
// DistanceMap
// ---------------------------------------------------------------------------

/// Result of a single-source search: best distance and predecessor of
/// every cell.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    bounds: Bounds,
    source: Coord,
    dist: Vec<u64>,
    prev: Vec<usize>,
    settled: usize,
    stale: usize,
}

impl DistanceMap {
    /// The cell the search started from.
    #[inline]
    pub fn source(&self) -> Coord {
        self.source
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Best known distance to `c`, or `None` if it was not reached (or is
    /// outside the searched area).
    pub fn dist(&self, c: Coord) -> Option<u64> {
        let i = self.bounds.index(c)?;
        let d = self.dist[i];
        (d != UNREACHABLE).then_some(d)
    }

    /// Predecessor of `c` on its best known path.
    pub fn prev(&self, c: Coord) -> Option<Coord> {
        let i = self.bounds.index(c)?;
        let p = self.prev[i];
        (p != NO_PARENT).then(|| self.bounds.coord(p))
    }

    #[inline]
    pub fn is_reachable(&self, c: Coord) -> bool {
        self.dist(c).is_some()
    }

    /// Number of cells popped and expanded.
    #[inline]
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Number of outdated queue entries skipped.
    #[inline]
    pub fn stale(&self) -> usize {
        self.stale
    }

    /// Reconstruct the route from the source to `target`.
    pub fn path_to(&self, target: Coord) -> Result<Search, PathError> {
        let ti = self.bounds.index(target).ok_or(GridError::OutOfRange {
            coord: target,
            bounds: self.bounds,
        })?;
        let cost = self.dist[ti];
        if cost == UNREACHABLE {
            return Ok(Search::Unreachable);
        }

        let mut cells = Vec::new();
        let mut ci = ti;
        while ci != NO_PARENT {
            cells.push(self.bounds.coord(ci));
            ci = self.prev[ci];
        }
        cells.reverse();
        debug_assert_eq!(cells.first(), Some(&self.source));
        Ok(Search::Found(Route::new(cells, cost)))
    }
}

// ---------------------------------------------------------------------------
// PathEngine
// ---------------------------------------------------------------------------

/// Dijkstra shortest-path search.
///
/// The engine only holds [`SearchOptions`]; every call allocates its own
/// working set, so one engine may serve any number of grids and threads.
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    options: SearchOptions,
}

impl PathEngine {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Compute distances and predecessors from `source` to every cell.
    ///
    /// The source is always expanded, whatever its own terrain: blocking a
    /// cell only removes the edges that end on it.
    pub fn distance_map<P: WeightedPather>(
        &self,
        pather: &P,
        source: Coord,
    ) -> Result<DistanceMap, PathError> {
        self.run(pather, source, None)
    }

    /// Find a minimum-cost route from `source` to `target`.
    ///
    /// Among equal-cost routes the first one discovered wins, which makes
    /// the result deterministic for a given grid.
    pub fn shortest_path<P: WeightedPather>(
        &self,
        pather: &P,
        source: Coord,
        target: Coord,
    ) -> Result<Search, PathError> {
        let bounds = pather.bounds();
        if !bounds.contains(target) {
            return Err(GridError::OutOfRange {
                coord: target,
                bounds,
            }
            .into());
        }
        let stop_at = self.options.early_exit.then_some(target);
        let map = self.run(pather, source, stop_at)?;
        let search = map.path_to(target)?;
        match &search {
            Search::Found(r) => log::debug!(
                "route {source} -> {target}: {} cells, cost {}",
                r.len(),
                r.cost()
            ),
            Search::Unreachable => log::debug!("route {source} -> {target}: unreachable"),
        }
        Ok(search)
    }

    fn run<P: WeightedPather>(
        &self,
        pather: &P,
        source: Coord,
        stop_at: Option<Coord>,
    ) -> Result<DistanceMap, PathError> {
        let bounds = pather.bounds();
        let si = bounds.index(source).ok_or(GridError::OutOfRange {
            coord: source,
            bounds,
        })?;
        let stop_idx = stop_at.and_then(|t| bounds.index(t));

        let mut map = DistanceMap {
            bounds,
            source,
            dist: vec![UNREACHABLE; bounds.len()],
            prev: vec![NO_PARENT; bounds.len()],
            settled: 0,
            stale: 0,
        };
        map.dist[si] = 0;

        let mut open = StablePriorityQueue::with_capacity(bounds.len());
        open.push(0, si);

        let mut nbuf = Vec::with_capacity(8);

        while let Some((d, ci)) = open.pop() {
            if let Some(e) = self.options.interrupted() {
                log::debug!("search from {source} stopped: {e}");
                return Err(e);
            }
            // Skip stale entries.
            if d > map.dist[ci] {
                map.stale += 1;
                continue;
            }
            map.settled += 1;
            if Some(ci) == stop_idx {
                break;
            }

            let cp = bounds.coord(ci);
            log::trace!("settle {cp} at {d}");

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                let Some(w) = pather.cost(cp, np) else {
                    continue;
                };
                let tentative = d + u64::from(w);
                if tentative < map.dist[ni] {
                    map.dist[ni] = tentative;
                    map.prev[ni] = ci;
                    open.push(tentative, ni);
                }
            }
        }

        log::debug!(
            "search from {source}: {} settled, {} stale",
            map.settled,
            map.stale
        );
        Ok(map)
    }
}

/// Find a minimum-cost route across `grid` with default options.
pub fn shortest_path(
    grid: &TerrainGrid,
    source: Coord,
    target: Coord,
) -> Result<Search, PathError> {
    PathEngine::default().shortest_path(grid, source, target)
}
