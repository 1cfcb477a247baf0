use super::*;
use crate::ColorTag;
use crate::Zoom;

/// The current round's markers and the only way to draw or erase them.
///
/// Markers are never removed one by one: the group is always cleared as a
/// whole, so what the surface shows and what the group tracks never diverge.
#[derive(Debug)]
pub struct MarkerGroup<S> {
    surface: S,
    config: MapConfig,
    members: Vec<MarkerId>,
}

impl<S> MarkerGroup<S>
where
    S: MapSurface,
{
    pub fn new(surface: S, config: MapConfig) -> Self {
        Self {
            surface,
            config,
            members: Vec::new(),
        }
    }
    pub fn surface(&self) -> &S {
        &self.surface
    }
    pub fn config(&self) -> &MapConfig {
        &self.config
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn contains(&self, id: MarkerId) -> bool {
        self.members.contains(&id)
    }
    /// Erase every marker of the group.
    pub fn clear(&mut self) {
        for id in self.members.drain(..) {
            self.surface.remove(id);
        }
    }
    /// Draw a marker with the icon of `color` and track it in the group.
    pub fn create_marker(&mut self, at: LatLng, color: ColorTag) -> Marker<'_, S> {
        let icon = self.config.icon(color);
        let id = self.surface.place(at, &icon);
        self.members.push(id);
        Marker { group: self, id }
    }
    /// Replace the popup text of a marker still in the group.
    pub fn annotate(&mut self, id: MarkerId, text: &str) -> bool {
        match self.contains(id) {
            true => {
                self.surface.annotate(id, text);
                true
            }
            false => false,
        }
    }
    pub fn zoom(&mut self, level: Zoom) {
        let level = level.clamp(self.config.min_zoom(), self.config.max_zoom());
        self.surface.zoom(level);
    }
    pub fn reset_zoom(&mut self) {
        self.zoom(self.config.default_zoom());
    }
}

/// Freshly created marker, ready for a popup.
pub struct Marker<'a, S> {
    group: &'a mut MarkerGroup<S>,
    id: MarkerId,
}

impl<'a, S> Marker<'a, S>
where
    S: MapSurface,
{
    pub fn id(&self) -> MarkerId {
        self.id
    }
    pub fn popup(self, text: &str) -> Self {
        self.group.surface.annotate(self.id, text);
        self
    }
    pub fn open(self) -> Self {
        self.group.surface.open(self.id);
        self
    }
}
