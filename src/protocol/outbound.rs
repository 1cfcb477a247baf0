use super::*;
use crate::identity::PlayerName;
use serde_json::Value;
use serde_json::json;

/// Events the client sends to the game master.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// Enter the default game under the given name.
    JoinGame(PlayerName),
    /// Answer the running round.
    Answer(AnswerSubmission),
}

impl Outbound {
    pub const JOIN_GAME: &'static str = "join_game";
    pub const ANSWER: &'static str = "answer";

    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinGame(_) => Self::JOIN_GAME,
            Self::Answer(_) => Self::ANSWER,
        }
    }
    /// Positional arguments. `answer` carries two bare numbers, not an object.
    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::JoinGame(name) => vec![json!(name.as_str())],
            Self::Answer(answer) => vec![json!(answer.lat), json!(answer.lng)],
        }
    }
}

impl From<&Outbound> for Frame {
    fn from(outbound: &Outbound) -> Self {
        Frame::new(outbound.name(), outbound.args())
    }
}

impl std::fmt::Display for Outbound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::JoinGame(name) => write!(f, "join as {}", name),
            Self::Answer(answer) => write!(f, "answer {:.4}, {:.4}", answer.lat, answer.lng),
        }
    }
}
