//! Named channel events exchanged with the game master.
//!
//! - [`Inbound`] — server pushes, decoded into typed payloads
//! - [`Outbound`] — client requests (`join_game`, `answer`)
//! - [`Frame`] — JSON wire envelope carrying an event name and positional args
mod color;
mod error;
mod frame;
mod inbound;
mod outbound;
mod payload;

pub use color::*;
pub use error::*;
pub use frame::*;
pub use inbound::*;
pub use outbound::*;
pub use payload::*;
