//! The sequence-memory game
//!
//! One round: append a random lane to the pattern, replay the whole
//! pattern on the lights, then require the player to press it back one
//! lane at a time. The game is won when the pattern reaches the
//! configured round target, and lost on the first mismatched or
//! ambiguous press.

pub mod engine;
pub mod lane;

pub use engine::{Game, Outcome};
pub use lane::{Lane, LaneSet};

/// How long each lane's light stays lit during playback
pub const PLAYBACK_ON_MS: u32 = 170;

/// Dark gap between lanes during playback
pub const PLAYBACK_GAP_MS: u32 = 130;

/// Pause between a completed round and the next playback
pub const ROUND_PAUSE_MS: u32 = 1000;

/// On and off hold of the all-lanes failure flash
pub const FAIL_FLASH_MS: u32 = 333;

/// Repetitions of the failure flash
pub const FAIL_FLASH_COUNT: u32 = 3;

/// Settle delay after first press detection, and the re-poll interval
/// while waiting for full release
pub const SETTLE_MS: u32 = 10;
