use crate::protocol::Frame;
use crate::protocol::Inbound;
use crate::protocol::Outbound;

/// Bidirectional event channel to the game master.
///
/// Implementations own reconnection. Frames that fail to decode are logged
/// and dropped inside `recv`, so callers only ever see well-formed events.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, message: Outbound) -> anyhow::Result<()>;
    /// Next well-formed event, or `None` once the channel is closed.
    async fn recv(&mut self) -> Option<Inbound>;
}

/// Decode a received frame, logging what gets dropped.
pub(crate) fn decode(frame: Frame) -> Option<Inbound> {
    match Inbound::try_from(frame) {
        Ok(event) => Some(event),
        Err(e) => {
            log::warn!("[transport] dropped: {}", e);
            None
        }
    }
}
