use serde::Deserialize;
use serde::Serialize;

/// Marker color identifying a player on the map.
/// Each tag maps onto one `marker-icon-<tag>.png` asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
    Yellow,
    Violet,
    #[serde(alias = "gray")]
    Grey,
    Black,
    Gold,
}

impl ColorTag {
    /// Color used when the server does not name one.
    pub const NEUTRAL: Self = Self::Grey;
    /// Color reserved for the correct answer.
    pub const CORRECT: Self = Self::Red;
    /// Color of the local player's result marker.
    pub const OWN: Self = Self::Blue;
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Violet => "violet",
            Self::Grey => "grey",
            Self::Black => "black",
            Self::Gold => "gold",
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for ColorTag {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "orange" => Ok(Self::Orange),
            "yellow" => Ok(Self::Yellow),
            "violet" => Ok(Self::Violet),
            "grey" | "gray" => Ok(Self::Grey),
            "black" => Ok(Self::Black),
            "gold" => Ok(Self::Gold),
            other => Err(format!("unknown color: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&ColorTag::Violet).unwrap(), "\"violet\"");
        assert_eq!(
            serde_json::from_str::<ColorTag>("\"grey\"").unwrap(),
            ColorTag::Grey
        );
    }
    #[test]
    fn parse_accepts_gray_spelling() {
        assert_eq!(ColorTag::try_from("Gray"), Ok(ColorTag::Grey));
        assert!(ColorTag::try_from("magenta").is_err());
    }
    #[test]
    fn reserved_colors() {
        assert_eq!(ColorTag::NEUTRAL, ColorTag::Grey);
        assert_eq!(ColorTag::CORRECT, ColorTag::Red);
        assert_eq!(ColorTag::default(), ColorTag::Blue);
    }
}
