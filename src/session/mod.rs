//! Connection to the game master.
//!
//! - [`Transport`] — async send/receive of typed events
//! - [`Loopback`] — in-process transport and its [`Remote`] end
//! - [`WebSocket`] — JSON frames over `tokio-tungstenite`
//! - [`Session`] — join handshake, dispatch and the event loop
//! - [`Screen`] — where the session draws its state
mod input;
mod loopback;
mod screen;
#[allow(clippy::module_inception)]
mod session;
mod transport;
mod websocket;

pub use input::*;
pub use loopback::*;
pub use screen::*;
pub use session::*;
pub use transport::*;
pub use websocket::*;
