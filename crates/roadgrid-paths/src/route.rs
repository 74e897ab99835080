use roadgrid_core::Coord;

/// A complete path from source to target, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoute"))]
pub struct Route {
    cells: Vec<Coord>,
    cost: u64,
}

/// A route with no cells was offered where a complete route is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("route has no cells")]
pub struct EmptyRoute;

/// Unchecked wire form of a [`Route`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoute {
    cells: Vec<Coord>,
    cost: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoute> for Route {
    type Error = EmptyRoute;

    fn try_from(raw: RawRoute) -> Result<Self, EmptyRoute> {
        if raw.cells.is_empty() {
            return Err(EmptyRoute);
        }
        Ok(Route::new(raw.cells, raw.cost))
    }
}

impl Route {
    /// `cells` must be non-empty.
    pub(crate) fn new(cells: Vec<Coord>, cost: u64) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Sum of edge costs along the route.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of cells, endpoints included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a route holds at least its source.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn source(&self) -> Coord {
        self.cells[0]
    }

    #[inline]
    pub fn target(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// A fresh playback over the route. Each call starts again at the
    /// source; the sequence ends after the target.
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            cells: &self.cells,
            pos: 0,
        }
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Step-by-step playback of a [`Route`].
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    cells: &'a [Coord],
    pos: usize,
}

impl Steps<'_> {
    /// Index of the next cell to be yielded.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind to the source.
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for Steps<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let c = *self.cells.get(self.pos)?;
        self.pos += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cells.len() - self.pos;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Steps<'_> {}

impl std::iter::FusedIterator for Steps<'_> {}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Search {
    Found(Route),
    /// No finite-cost path connects source and target.
    Unreachable,
}

impl Search {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Search::Found(_))
    }

    #[inline]
    pub fn route(&self) -> Option<&Route> {
        match self {
            Search::Found(r) => Some(r),
            Search::Unreachable => None,
        }
    }

    #[inline]
    pub fn into_route(self) -> Option<Route> {
        match self {
            Search::Found(r) => Some(r),
            Search::Unreachable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Route {
        Route::new(
            vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
            2,
        )
    }

    #[test]
    fn endpoints() {
        let r = sample();
        assert_eq!(r.source(), Coord::new(0, 0));
        assert_eq!(r.target(), Coord::new(2, 2));
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
        assert_eq!(r.cost(), 2);
    }

    #[test]
    fn steps_are_finite_and_restartable() {
        let r = sample();
        let mut s = r.steps();
        assert_eq!(s.len(), 3);
        assert_eq!(s.next(), Some(Coord::new(0, 0)));
        assert_eq!(s.next(), Some(Coord::new(1, 1)));
        assert_eq!(s.position(), 2);
        assert_eq!(s.next(), Some(Coord::new(2, 2)));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
        s.restart();
        assert_eq!(s.next(), Some(Coord::new(0, 0)));

        let again: Vec<_> = r.steps().collect();
        assert_eq!(again, r.cells());
    }

    #[test]
    fn search_accessors() {
        let found = Search::Found(sample());
        assert!(found.is_found());
        assert_eq!(found.route().map(Route::len), Some(3));
        assert_eq!(Search::Unreachable.into_route(), None);
    }
}
