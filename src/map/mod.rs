//! World map adapter.
//!
//! - [`MapSurface`] — pluggable rendering engine (place/remove/annotate/zoom)
//! - [`MarkerGroup`] — the current round's markers, cleared as a unit
//! - [`MapConfig`] — view bounds, zoom range and marker icons
//! - [`Canvas`] — in-memory surface
mod canvas;
mod coordinate;
mod markers;
mod surface;
mod view;

pub use canvas::*;
pub use coordinate::*;
pub use markers::*;
pub use surface::*;
pub use view::*;
