use super::*;
use crate::Degrees;
use crate::Kilometers;
use crate::Points;
use crate::map::LatLng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Location to find, pushed at the start of every round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundAnnouncement {
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// The local player's answer for the running round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerSubmission {
    pub lat: Degrees,
    pub lng: Degrees,
}

impl AnswerSubmission {
    pub fn at(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

impl From<LatLng> for AnswerSubmission {
    fn from(at: LatLng) -> Self {
        Self {
            lat: at.lat(),
            lng: at.lng(),
        }
    }
}

/// How the local player did this round.
/// Delivered privately, in any order relative to the round-end broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAnswerResult {
    pub lat: Degrees,
    pub lng: Degrees,
    pub distance: Kilometers,
    pub score: Points,
    pub rank: usize,
    pub total: usize,
}

impl PlayerAnswerResult {
    pub fn at(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
    pub fn too_far(&self) -> bool {
        self.score == 0
    }
}

/// Another player's answer revealed at round end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnAnswer {
    pub name: String,
    pub lat: Degrees,
    pub lng: Degrees,
    pub distance: Kilometers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorTag>,
}

impl TurnAnswer {
    pub fn at(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
    /// Absent colors are drawn neutral.
    pub fn color(&self) -> ColorTag {
        self.color.unwrap_or(ColorTag::NEUTRAL)
    }
}

/// Where the location actually is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectAnswer {
    pub name: String,
    pub lat: Degrees,
    pub lng: Degrees,
}

impl CorrectAnswer {
    pub fn at(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Round-end broadcast: every ranked answer plus the correct one.
/// Answers are ordered closest first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TurnResultsWire")]
pub struct TurnResults {
    pub answers: Vec<TurnAnswer>,
    pub correct: CorrectAnswer,
}

impl TurnResults {
    pub fn closest(&self) -> Option<&TurnAnswer> {
        self.answers.first()
    }
}

/// Accepts both the flat `answers` list and the older
/// `best_answer` + `other_answers` split.
#[derive(Deserialize)]
struct TurnResultsWire {
    #[serde(default)]
    answers: Option<Vec<TurnAnswer>>,
    #[serde(default)]
    best_answer: Option<TurnAnswer>,
    #[serde(default)]
    other_answers: Vec<TurnAnswer>,
    correct_answer: CorrectAnswer,
}

impl From<TurnResultsWire> for TurnResults {
    fn from(wire: TurnResultsWire) -> Self {
        let answers = match wire.answers {
            Some(answers) => answers,
            None => wire
                .best_answer
                .into_iter()
                .chain(wire.other_answers)
                .collect(),
        };
        Self {
            answers,
            correct: wire.correct_answer,
        }
    }
}

/// One visible leaderboard slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_name: String,
    pub score: Points,
}

/// Complete leaderboard view for the local player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    /// 0-based rank of the local player.
    pub player_rank: usize,
    pub player_score: Points,
    pub total_player: usize,
    pub top_ten: Vec<Standing>,
}

/// One line of the map legend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "LegendTuple")]
pub struct LegendEntry {
    pub name: String,
    pub color: ColorTag,
    pub distance: Kilometers,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegendTuple {
    Scored(String, ColorTag, Kilometers),
    Unscored(String, ColorTag),
}

impl From<LegendTuple> for LegendEntry {
    fn from(tuple: LegendTuple) -> Self {
        match tuple {
            LegendTuple::Scored(name, color, distance) => Self {
                name,
                color,
                distance,
            },
            LegendTuple::Unscored(name, color) => Self {
                name,
                color,
                distance: 0.0,
            },
        }
    }
}

/// Full legend replacement.
/// Arrives either as a list or as an object keyed by 1-based position.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "LegendWire")]
pub struct LegendUpdate(pub Vec<LegendEntry>);

#[derive(Deserialize)]
#[serde(untagged)]
enum LegendWire {
    Listed(Vec<LegendEntry>),
    Indexed(BTreeMap<String, LegendEntry>),
}

impl From<LegendWire> for LegendUpdate {
    fn from(wire: LegendWire) -> Self {
        match wire {
            LegendWire::Listed(entries) => Self(entries),
            LegendWire::Indexed(entries) => {
                let mut entries = entries.into_iter().collect::<Vec<_>>();
                entries.sort_by_key(|(key, _)| key.parse::<usize>().unwrap_or(usize::MAX));
                Self(entries.into_iter().map(|(_, entry)| entry).collect())
            }
        }
    }
}
