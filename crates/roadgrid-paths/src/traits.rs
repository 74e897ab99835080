use roadgrid_core::{Bounds, Coord, TerrainGrid};

/// Minimal pathfinding interface — provides the searchable extent and
/// neighbour enumeration.
pub trait Pather {
    /// Extent of the searchable area. Every coordinate a search touches
    /// lies inside it.
    fn bounds(&self) -> Bounds;

    /// Append neighbours of `c` into `buf`, in the order ties should be
    /// broken. The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`, or `None` if the edge
    /// does not exist.
    fn cost(&self, from: Coord, to: Coord) -> Option<u32>;
}

impl Pather for TerrainGrid {
    #[inline]
    fn bounds(&self) -> Bounds {
        TerrainGrid::bounds(self)
    }

    #[inline]
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        self.neighbors_into(c, buf);
    }
}

impl WeightedPather for TerrainGrid {
    #[inline]
    fn cost(&self, from: Coord, to: Coord) -> Option<u32> {
        self.edge_cost(from, to)
    }
}
