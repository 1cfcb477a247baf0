use super::*;
use crate::protocol::Frame;
use crate::protocol::Inbound;
use crate::protocol::Outbound;
use serde_json::Value;
use tokio::sync::mpsc::*;

/// In-process transport. Frames cross a pair of unbounded channels,
/// so inbound payloads go through the same decoding as on the wire.
pub struct Loopback {
    tx: UnboundedSender<Frame>,
    rx: UnboundedReceiver<Frame>,
}

/// The game master's end of a [`Loopback`].
pub struct Remote {
    tx: UnboundedSender<Frame>,
    rx: UnboundedReceiver<Frame>,
}

impl Loopback {
    pub fn pair() -> (Self, Remote) {
        let (client_tx, remote_rx) = unbounded_channel();
        let (remote_tx, client_rx) = unbounded_channel();
        let client = Self {
            tx: client_tx,
            rx: client_rx,
        };
        let remote = Remote {
            tx: remote_tx,
            rx: remote_rx,
        };
        (client, remote)
    }
}

#[async_trait::async_trait]
impl Transport for Loopback {
    async fn send(&mut self, message: Outbound) -> anyhow::Result<()> {
        self.tx
            .send(Frame::from(&message))
            .map_err(|_| anyhow::anyhow!("loopback closed"))
    }
    async fn recv(&mut self) -> Option<Inbound> {
        loop {
            match self.rx.recv().await {
                Some(frame) => match decode(frame) {
                    Some(event) => return Some(event),
                    None => continue,
                },
                None => return None,
            }
        }
    }
}

impl Remote {
    /// Push a named event with a single payload argument.
    pub fn emit(&self, event: &str, payload: Value) -> anyhow::Result<()> {
        self.tx
            .send(Frame::new(event, vec![payload]))
            .map_err(|_| anyhow::anyhow!("client gone"))
    }
    /// Next frame sent by the client.
    pub async fn recv(&mut self) -> Option<Frame> {
        self.rx.recv().await
    }
    pub fn try_recv(&mut self) -> Option<Frame> {
        self.rx.try_recv().ok()
    }
}
