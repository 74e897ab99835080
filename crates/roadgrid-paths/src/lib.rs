//! Weighted shortest-path search over road grids.
//!
//! The engine runs Dijkstra's algorithm over the 8-connected graph implied
//! by a [`TerrainGrid`](roadgrid_core::TerrainGrid): stepping onto road costs
//! 1, onto open ground 9999, and blocked cells have no incoming edges.
//!
//! - [`shortest_path`] / [`PathEngine::shortest_path`] return a [`Search`]:
//!   either a [`Route`] or an explicit [`Search::Unreachable`].
//! - [`PathEngine::distance_map`] exposes the full single-source tree.
//!
//! Results are deterministic. Neighbours are expanded in a fixed order,
//! equal distances leave the queue first-in first-out, and an equal-cost
//! alternative never replaces a route already found.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | extent and neighbour order |
//! | [`WeightedPather`] : [`Pather`] | edge costs |

mod dijkstra;
mod error;
mod queue;
mod route;
mod traits;

pub use dijkstra::{
    CancelToken, DistanceMap, PathEngine, SearchOptions, UNREACHABLE, shortest_path,
};
pub use error::PathError;
pub use queue::StablePriorityQueue;
pub use route::{EmptyRoute, Route, Search, Steps};
pub use traits::{Pather, WeightedPather};
