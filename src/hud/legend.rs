use crate::protocol::ColorTag;
use crate::protocol::LegendEntry;
use crate::protocol::LegendUpdate;
use crate::round2;

/// Player colors shown in the map corner, followed by a fixed entry for the
/// correct answer marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend(Vec<LegendEntry>);

impl Legend {
    pub const FOOTER: &'static str = "Correct answer";

    /// Drop the previous legend and show this one.
    pub fn replace(&mut self, update: LegendUpdate) {
        self.0 = update.0;
    }
    pub fn entries(&self) -> &[LegendEntry] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Every legend line with its marker color, footer included.
    pub fn lines(&self) -> Vec<(ColorTag, String)> {
        self.0
            .iter()
            .map(|e| (e.color, format!("{} - {}km", e.name, round2(e.distance))))
            .chain(std::iter::once((ColorTag::CORRECT, Self::FOOTER.to_string())))
            .collect()
    }
}
