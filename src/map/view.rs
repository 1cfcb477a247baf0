use super::*;
use crate::CDN_URL;
use crate::ColorTag;
use crate::DEFAULT_ZOOM;
use crate::MAP_CENTER;
use crate::ZOOM_LEVEL;
use crate::Zoom;

/// Marker image and where it is pinned relative to the coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub color: ColorTag,
    pub url: String,
    pub shadow: String,
    pub anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
}

/// Fixed map view parameters for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    cdn: String,
    center: LatLng,
    bounds: Bounds,
    zoom_level: Zoom,
}

impl MapConfig {
    /// `zoom_level` is how many levels the player may zoom past the default.
    pub fn new(cdn: &str, zoom_level: Zoom) -> Self {
        Self {
            cdn: cdn.trim_end_matches('/').to_string(),
            center: LatLng::from(MAP_CENTER),
            bounds: Bounds::default(),
            zoom_level,
        }
    }
    pub fn center(&self) -> LatLng {
        self.center
    }
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    pub fn default_zoom(&self) -> Zoom {
        DEFAULT_ZOOM
    }
    pub fn min_zoom(&self) -> Zoom {
        DEFAULT_ZOOM
    }
    pub fn max_zoom(&self) -> Zoom {
        DEFAULT_ZOOM.saturating_add(self.zoom_level)
    }
    /// Zoom buttons are pointless when the zoom is locked.
    pub fn zoom_control(&self) -> bool {
        self.zoom_level != 0
    }
    pub fn tiles(&self) -> String {
        format!("{}/tiles/{{z}}/{{x}}/{{y}}.png", self.cdn)
    }
    pub fn icon(&self, color: ColorTag) -> Icon {
        Icon {
            color,
            url: format!("{}/images/marker-icon-{}.png", self.cdn, color),
            shadow: format!("{}/images/marker-shadow.png", self.cdn),
            anchor: (12, 41),
            popup_anchor: (1, -34),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(CDN_URL, ZOOM_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn zoom_range_follows_level() {
        let config = MapConfig::new("static", 2);
        assert_eq!(config.min_zoom(), 2);
        assert_eq!(config.max_zoom(), 4);
        assert!(config.zoom_control());
    }
    #[test]
    fn locked_zoom_hides_control() {
        let config = MapConfig::new("static", 0);
        assert_eq!(config.max_zoom(), config.min_zoom());
        assert!(!config.zoom_control());
    }
    #[test]
    fn view_defaults() {
        let config = MapConfig::new("static/", 2);
        assert_eq!(config.center(), LatLng::new(49.0, 2.5));
        assert_eq!(config.tiles(), "static/tiles/{z}/{x}/{y}.png");
    }
    #[test]
    fn icon_urls() {
        let icon = MapConfig::new("https://cdn.example/", 2).icon(ColorTag::Green);
        assert_eq!(icon.url, "https://cdn.example/images/marker-icon-green.png");
        assert_eq!(icon.shadow, "https://cdn.example/images/marker-shadow.png");
        assert_eq!(icon.anchor, (12, 41));
    }
}
