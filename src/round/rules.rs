use crate::ALLOW_MULTIPLE_ANSWERS;
use crate::MAX_RESPONSE_TIME;
use crate::ZOOM_LEVEL;
use crate::Zoom;
use std::time::Duration;

/// Game rules fixed at startup for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Countdown length of every round.
    pub max_response_time: Duration,
    /// Keep clicks enabled after the first answer of a round.
    pub allow_multiple_answers: bool,
    /// Zoom levels allowed above the default.
    pub zoom_level: Zoom,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_response_time: Duration::from_secs(MAX_RESPONSE_TIME),
            allow_multiple_answers: ALLOW_MULTIPLE_ANSWERS,
            zoom_level: ZOOM_LEVEL,
        }
    }
}
