//! Time-driven HUD state. Every method takes the current instant explicitly.
mod countdown;
mod counter;

pub use countdown::*;
pub use counter::*;
