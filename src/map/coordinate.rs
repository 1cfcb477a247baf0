use crate::Degrees;
use crate::MAP_NORTH_EAST;
use crate::MAP_SOUTH_WEST;

/// Point on the world map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    lat: Degrees,
    lng: Degrees,
}

impl LatLng {
    pub fn new(lat: Degrees, lng: Degrees) -> Self {
        Self { lat, lng }
    }
    pub fn lat(&self) -> Degrees {
        self.lat
    }
    pub fn lng(&self) -> Degrees {
        self.lng
    }
}

impl From<(Degrees, Degrees)> for LatLng {
    fn from((lat, lng): (Degrees, Degrees)) -> Self {
        Self::new(lat, lng)
    }
}

impl TryFrom<&str> for LatLng {
    type Error = String;
    /// Parses `"lat lng"` or `"lat, lng"`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>();
        match parts.as_slice() {
            [lat, lng] => {
                let lat = lat
                    .parse::<Degrees>()
                    .map_err(|_| format!("invalid latitude: {}", lat))?;
                let lng = lng
                    .parse::<Degrees>()
                    .map_err(|_| format!("invalid longitude: {}", lng))?;
                Ok(Self::new(lat, lng))
            }
            _ => Err(format!("expected \"lat lng\", got {:?}", s)),
        }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Rectangle the viewport is not allowed to leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    south_west: LatLng,
    north_east: LatLng,
}

impl Bounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }
    pub fn south_west(&self) -> LatLng {
        self.south_west
    }
    pub fn north_east(&self) -> LatLng {
        self.north_east
    }
    pub fn contains(&self, at: &LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&at.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&at.lng)
    }
    /// Nearest point inside the bounds.
    pub fn clamp(&self, at: LatLng) -> LatLng {
        LatLng::new(
            at.lat.clamp(self.south_west.lat, self.north_east.lat),
            at.lng.clamp(self.south_west.lng, self.north_east.lng),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(LatLng::from(MAP_SOUTH_WEST), LatLng::from(MAP_NORTH_EAST))
    }
}
