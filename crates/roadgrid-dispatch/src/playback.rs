//! Step-by-step playback of a route.
//!
//! A [`Playback`] is a finite, restartable cursor over a [`Route`]. Whoever
//! drives it decides the pacing; [`interval`](Playback::interval) is only
//! the suggested delay between ticks.

use std::time::Duration;

use roadgrid_core::Coord;
use roadgrid_paths::Route;

/// Suggested delay between two playback steps.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Result of advancing a [`Playback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The token moved onto this cell.
    Moved(Coord),
    /// The token already stands on the target.
    Arrived,
}

/// Token movement along a route.
#[derive(Debug, Clone)]
pub struct Playback {
    route: Route,
    next: usize,
    interval: Duration,
}

impl Playback {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            next: 0,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Set the suggested delay between ticks (builder).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Advance by one cell. The first tick places the token on the source.
    pub fn tick(&mut self) -> Tick {
        match self.route.cells().get(self.next) {
            Some(&c) => {
                self.next += 1;
                Tick::Moved(c)
            }
            None => Tick::Arrived,
        }
    }

    /// Cell the token currently occupies, or `None` before the first tick.
    pub fn position(&self) -> Option<Coord> {
        self.next
            .checked_sub(1)
            .map(|i| self.route.cells()[i])
    }

    /// Ticks left before [`Tick::Arrived`].
    #[inline]
    pub fn remaining(&self) -> usize {
        self.route.len() - self.next
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Put the token back before the source.
    pub fn restart(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadgrid_core::{Terrain, TerrainGrid};
    use roadgrid_paths::shortest_path;

    fn route() -> Route {
        let mut g = TerrainGrid::new(1, 3);
        g.fill(Terrain::Road);
        shortest_path(&g, Coord::new(0, 0), Coord::new(0, 2))
            .unwrap()
            .into_route()
            .unwrap()
    }

    #[test]
    fn ticks_walk_the_route_then_arrive() {
        let mut p = Playback::new(route());
        assert_eq!(p.position(), None);
        assert_eq!(p.remaining(), 3);
        assert_eq!(p.tick(), Tick::Moved(Coord::new(0, 0)));
        assert_eq!(p.tick(), Tick::Moved(Coord::new(0, 1)));
        assert_eq!(p.position(), Some(Coord::new(0, 1)));
        assert_eq!(p.tick(), Tick::Moved(Coord::new(0, 2)));
        assert!(p.is_finished());
        assert_eq!(p.tick(), Tick::Arrived);
        assert_eq!(p.tick(), Tick::Arrived);
        assert_eq!(p.position(), Some(Coord::new(0, 2)));
    }

    #[test]
    fn restart_rewinds() {
        let mut p = Playback::new(route()).with_interval(Duration::from_millis(20));
        assert_eq!(p.interval(), Duration::from_millis(20));
        while p.tick() != Tick::Arrived {}
        p.restart();
        assert_eq!(p.position(), None);
        assert_eq!(p.tick(), Tick::Moved(Coord::new(0, 0)));
    }

    #[test]
    fn default_interval_is_half_a_second() {
        assert_eq!(Playback::new(route()).interval(), Duration::from_millis(500));
    }
}
