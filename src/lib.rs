//! Client-side controller for a real-time, map-based geography guessing game.
//!
//! A player joins a shared session, is shown a location each round, clicks a
//! point on the world map to answer, and receives distance, rank and score
//! once the round ends.
//!
//! ## Architecture
//!
//! - [`map`] — Marker group adapter over a pluggable [`MapSurface`]
//! - [`hud`] — Leaderboard, legend and popup text rendering
//! - [`clock`] — Round countdown and score-reveal animation
//! - [`round`] — Phase state machine driven by inbound events
//! - [`session`] — Transport, join handshake and event dispatch
//! - [`identity`] — Player name validation, persistence and prompting
//! - [`protocol`] — Typed inbound/outbound events and wire frames
#![allow(dead_code)]

pub mod clock;
pub mod hud;
pub mod identity;
pub mod map;
pub mod protocol;
pub mod round;
pub mod session;

pub use clock::*;
pub use hud::*;
pub use identity::*;
pub use map::*;
pub use protocol::*;
pub use round::*;
pub use session::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Latitude or longitude in decimal degrees.
pub type Degrees = f64;
/// Great-circle distance between an answer and the target.
pub type Kilometers = f64;
/// Points awarded for a single answer or accumulated on the leaderboard.
pub type Points = u32;
/// Leaflet-style zoom level.
pub type Zoom = u8;

// ============================================================================
// GAME RULES
// Defaults mirror the game master configuration.
// ============================================================================
/// Seconds given to players to answer a question.
pub const MAX_RESPONSE_TIME: u64 = 11;
/// Whether players may answer multiple times to the same question.
pub const ALLOW_MULTIPLE_ANSWERS: bool = true;
/// Zoom levels allowed above the default zoom (max 2).
pub const ZOOM_LEVEL: Zoom = 2;

// ============================================================================
// MAP VIEW
// ============================================================================
/// Zoom level the map starts at and resets to at every reveal.
pub const DEFAULT_ZOOM: Zoom = 2;
/// Initial map center.
pub const MAP_CENTER: (Degrees, Degrees) = (49.0, 2.5);
/// South-west corner the viewport may not leave.
pub const MAP_SOUTH_WEST: (Degrees, Degrees) = (-70.0, -180.0);
/// North-east corner the viewport may not leave.
pub const MAP_NORTH_EAST: (Degrees, Degrees) = (85.0, 180.0);
/// Prefix for marker icons and tiles.
pub const CDN_URL: &str = "static";

// ============================================================================
// HUD
// ============================================================================
/// Visible leaderboard rows before the trailing self row.
pub const LEADERBOARD_SIZE: usize = 10;
/// Total duration of the score-reveal animation.
pub const SCORE_ANIMATION: std::time::Duration = std::time::Duration::from_millis(1000);
/// No score animation step is shorter than this (not visible anyway).
pub const SCORE_MIN_STEP: std::time::Duration = std::time::Duration::from_millis(50);
/// Interval at which the session loop polls running animations.
pub const ANIMATION_TICK: std::time::Duration = std::time::Duration::from_millis(50);

// ============================================================================
// IDENTITY
// ============================================================================
/// Longest accepted player name, in characters.
pub const NAME_MAX_LENGTH: usize = 50;
/// Well-known key the player name is persisted under.
pub const NAME_STORAGE_KEY: &str = "player_name";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Round a float to 2 decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
