use super::*;
use crate::protocol::Frame;
use crate::protocol::Inbound;
use crate::protocol::Outbound;
use futures::SinkExt;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// One JSON [`Frame`] per WebSocket text message.
pub struct WebSocket {
    url: String,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocket {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let (stream, _) = connect_async(url)
            .await
            .map_err(|e| anyhow::anyhow!("connect {}: {}", url, e))?;
        log::info!("[websocket] connected to {}", url);
        Ok(Self {
            url: url.to_string(),
            stream,
        })
    }
}

#[async_trait::async_trait]
impl Transport for WebSocket {
    async fn send(&mut self, message: Outbound) -> anyhow::Result<()> {
        log::debug!("[websocket] send {}", message);
        let json = Frame::from(&message).to_json();
        self.stream
            .send(Message::Text(json))
            .await
            .map_err(|e| anyhow::anyhow!("send {}: {}", message.name(), e))
    }
    async fn recv(&mut self) -> Option<Inbound> {
        'recv: loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => match Frame::from_json(&text) {
                    Ok(frame) => match decode(frame) {
                        Some(event) => return Some(event),
                        None => continue 'recv,
                    },
                    Err(e) => {
                        log::warn!("[websocket] dropped: {}", e);
                        continue 'recv;
                    }
                },
                Some(Ok(Message::Close(_))) => break 'recv,
                Some(Ok(_)) => continue 'recv,
                Some(Err(e)) => {
                    log::warn!("[websocket] {}", e);
                    break 'recv;
                }
                None => break 'recv,
            }
        }
        log::info!("[websocket] disconnected from {}", self.url);
        None
    }
}
