//! Text shown around the map.
//!
//! - [`Leaderboard`] — top ten plus the local player's rank
//! - [`Legend`] — player colors and the correct answer marker
//! - [`popup`] — marker annotations and round prompts
mod leaderboard;
mod legend;
pub mod popup;

pub use leaderboard::*;
pub use legend::*;
