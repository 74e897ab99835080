//! Start/end placement, run requests and route playback for road grids.
//!
//! This is the state a front end keeps around the path engine: which cells
//! hold the vehicle and the destination, what a click currently does, and
//! how far the vehicle has moved along the last route.

mod dispatcher;
mod error;
mod playback;

pub use dispatcher::{Dispatcher, Mode};
pub use error::DispatchError;
pub use playback::{DEFAULT_INTERVAL, Playback, Tick};
