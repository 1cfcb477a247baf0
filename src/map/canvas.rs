use super::*;
use crate::ColorTag;
use crate::Zoom;
use std::collections::BTreeMap;

/// A marker as drawn on a [`Canvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub at: LatLng,
    pub icon: Icon,
    pub popup: Option<String>,
    pub open: bool,
}

impl Pin {
    pub fn color(&self) -> ColorTag {
        self.icon.color
    }
}

/// In-memory map surface.
/// Records what a real map would show; at most one popup is open at a time.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    next: u64,
    zoom: Zoom,
    pins: BTreeMap<MarkerId, Pin>,
}

impl Canvas {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            next: 0,
            zoom: config.default_zoom(),
            pins: BTreeMap::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.pins.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
    pub fn zoom_level(&self) -> Zoom {
        self.zoom
    }
    pub fn pin(&self, id: MarkerId) -> Option<&Pin> {
        self.pins.get(&id)
    }
    /// Pins in drawing order.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> + '_ {
        self.pins.values()
    }
    pub fn opened(&self) -> Option<&Pin> {
        self.pins.values().find(|p| p.open)
    }
}

impl MapSurface for Canvas {
    fn place(&mut self, at: LatLng, icon: &Icon) -> MarkerId {
        let id = MarkerId(self.next);
        self.next += 1;
        self.pins.insert(
            id,
            Pin {
                at,
                icon: icon.clone(),
                popup: None,
                open: false,
            },
        );
        id
    }
    fn remove(&mut self, id: MarkerId) {
        self.pins.remove(&id);
    }
    fn annotate(&mut self, id: MarkerId, text: &str) {
        if let Some(pin) = self.pins.get_mut(&id) {
            pin.popup = Some(text.to_string());
        }
    }
    fn open(&mut self, id: MarkerId) {
        if self.pins.contains_key(&id) {
            self.pins
                .iter_mut()
                .for_each(|(other, pin)| pin.open = *other == id);
        }
    }
    fn zoom(&mut self, level: Zoom) {
        self.zoom = level;
    }
}
