//! Map view synchronization.
//!
//! The tile renderer is a black-box drawing surface; this module owns the
//! contract with it ([`MapSurface`]) and the logic that keeps its viewport
//! fitted to the latest route ([`MapView`]).

mod surface;
mod sync;

pub use surface::{MapConfig, MapSurface, Marker};
pub use sync::MapView;
