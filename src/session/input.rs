use crate::Zoom;
use crate::map::LatLng;

/// Local player actions fed into the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Click on the map.
    Click(LatLng),
    /// Collapse or expand the leaderboard.
    Toggle,
    /// Zoom the map.
    Zoom(Zoom),
}

impl TryFrom<&str> for Input {
    type Error = String;
    /// `t`, `z <level>`, or a `lat lng` click.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["t"] | ["toggle"] => Ok(Self::Toggle),
            ["z", level] | ["zoom", level] => level
                .parse::<Zoom>()
                .map(Self::Zoom)
                .map_err(|_| format!("invalid zoom level: {}", level)),
            _ => LatLng::try_from(s).map(Self::Click),
        }
    }
}
