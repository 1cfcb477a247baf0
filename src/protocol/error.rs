/// Errors that can occur while decoding or encoding channel events.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    UnknownEvent(String),
    InvalidPayload { event: String, reason: String },
    InvalidFrame(String),
}

impl ProtocolError {
    pub fn payload(event: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidPayload {
            event: event.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEvent(s) => write!(f, "unknown event: {}", s),
            Self::InvalidPayload { event, reason } => {
                write!(f, "invalid {} payload: {}", event, reason)
            }
            Self::InvalidFrame(s) => write!(f, "invalid frame: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}
