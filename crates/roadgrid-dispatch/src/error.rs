use roadgrid_core::{Coord, GridError};
use roadgrid_paths::PathError;
use thiserror::Error;

/// Errors raised while placing markers or dispatching a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("both a start and an end point must be placed before running")]
    MissingEndpoints {
        start: Option<Coord>,
        end: Option<Coord>,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Path(#[from] PathError),
}
