use roadgrid_core::GridError;
use thiserror::Error;

/// Errors a search can fail with.
///
/// An unreachable target is not an error; see [`Search`](crate::Search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error(transparent)]
    OutOfRange(#[from] GridError),

    #[error("search cancelled")]
    Cancelled,

    #[error("search deadline exceeded")]
    DeadlineExceeded,
}
