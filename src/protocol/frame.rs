use super::*;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Named event with positional arguments, as carried over the wire.
/// One JSON text message per frame: `{"event": "answer", "args": [48.8, 2.3]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub event: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Frame {
    pub fn new(event: &str, args: Vec<Value>) -> Self {
        Self {
            event: event.to_string(),
            args,
        }
    }
    /// First positional argument, or null for argument-less events.
    pub fn payload(self) -> Value {
        self.args.into_iter().next().unwrap_or(Value::Null)
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize frame")
    }
    pub fn from_json(s: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(s).map_err(|e| ProtocolError::InvalidFrame(e.to_string()))
    }
}
