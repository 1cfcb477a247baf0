use super::*;
use crate::Zoom;

/// Opaque handle to a marker drawn on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// Rendering engine that draws the world map and its markers.
///
/// Implementations can be a browser map widget, a terminal sketch, or an
/// in-memory recorder. Callers never use a surface directly: every marker goes
/// through [`MarkerGroup`] so the drawn state and the tracked group agree.
pub trait MapSurface {
    /// Draw a marker and return its handle.
    fn place(&mut self, at: LatLng, icon: &Icon) -> MarkerId;
    /// Erase a marker. Unknown handles are ignored.
    fn remove(&mut self, id: MarkerId);
    /// Attach or replace the popup text of a marker.
    fn annotate(&mut self, id: MarkerId, text: &str);
    /// Show the popup of a marker.
    fn open(&mut self, id: MarkerId);
    /// Set the viewport zoom.
    fn zoom(&mut self, level: Zoom);
}
