use super::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Events pushed by the game master to every connected client.
/// Each variant carries the typed payload of its named event.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// A new round starts.
    NewTurn(RoundAnnouncement),
    /// The round is over; reveal every answer.
    EndOfTurn(TurnResults),
    /// Private outcome of the local player's answer.
    PlayerResults(PlayerAnswerResult),
    /// Global ranking as seen by the local player.
    LeaderboardUpdate(LeaderboardSnapshot),
    /// Players and their marker colors.
    LegendChanges(LegendUpdate),
    /// Marker color assigned to the local player.
    ColorInform(ColorTag),
}

impl Inbound {
    pub const NEW_TURN: &'static str = "new_turn";
    pub const END_OF_TURN: &'static str = "end_of_turn";
    pub const PLAYER_RESULTS: &'static str = "player_results";
    pub const LEADERBOARD_UPDATE: &'static str = "leaderboard_update";
    pub const LEGEND_CHANGES: &'static str = "legend_changes";
    pub const COLOR_INFORM: &'static str = "color_inform";

    pub fn name(&self) -> &'static str {
        match self {
            Self::NewTurn(_) => Self::NEW_TURN,
            Self::EndOfTurn(_) => Self::END_OF_TURN,
            Self::PlayerResults(_) => Self::PLAYER_RESULTS,
            Self::LeaderboardUpdate(_) => Self::LEADERBOARD_UPDATE,
            Self::LegendChanges(_) => Self::LEGEND_CHANGES,
            Self::ColorInform(_) => Self::COLOR_INFORM,
        }
    }
    /// Decodes a named event and its payload into a typed message.
    pub fn decode(event: &str, payload: Value) -> Result<Self, ProtocolError> {
        match event {
            Self::NEW_TURN => Self::parse(event, payload).map(Self::NewTurn),
            Self::END_OF_TURN => Self::parse(event, payload).map(Self::EndOfTurn),
            Self::PLAYER_RESULTS => Self::parse(event, payload).map(Self::PlayerResults),
            Self::LEADERBOARD_UPDATE => Self::parse(event, payload).map(Self::LeaderboardUpdate),
            Self::LEGEND_CHANGES => Self::parse(event, payload).map(Self::LegendChanges),
            Self::COLOR_INFORM => Self::parse(event, payload).map(Self::ColorInform),
            other => Err(ProtocolError::UnknownEvent(other.to_string())),
        }
    }
    fn parse<T>(event: &str, payload: Value) -> Result<T, ProtocolError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(payload).map_err(|e| ProtocolError::payload(event, e))
    }
}

impl TryFrom<Frame> for Inbound {
    type Error = ProtocolError;
    fn try_from(frame: Frame) -> Result<Self, Self::Error> {
        let event = frame.event.clone();
        Self::decode(&event, frame.payload())
    }
}

impl std::fmt::Display for Inbound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NewTurn(round) => write!(f, "new turn: {} ({})", round.city, round.country),
            Self::EndOfTurn(results) => write!(
                f,
                "end of turn: {} answer(s), correct {}",
                results.answers.len(),
                results.correct.name
            ),
            Self::PlayerResults(result) => write!(
                f,
                "results: #{}/{} at {} km for {} points",
                result.rank, result.total, result.distance, result.score
            ),
            Self::LeaderboardUpdate(board) => write!(
                f,
                "leaderboard: #{} of {}",
                board.player_rank + 1,
                board.total_player
            ),
            Self::LegendChanges(legend) => write!(f, "legend: {} player(s)", legend.0.len()),
            Self::ColorInform(color) => write!(f, "color: {}", color),
        }
    }
}
