//! Round lifecycle.
//!
//! - [`Phase`] — idle, answering, revealed; transitions keyed by [`Trigger`]
//! - [`Rules`] — session-wide game rules
//! - [`Round`] — per-round state driven by inbound events and clicks
mod phase;
#[allow(clippy::module_inception)]
mod round;
mod rules;

pub use phase::*;
pub use round::*;
pub use rules::*;
