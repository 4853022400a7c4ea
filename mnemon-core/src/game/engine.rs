//! Game engine
//!
//! Owns the growing pattern and runs the round loop:
//! generate -> play -> capture -> score. The engine is generic over the
//! panel, delay, and randomness collaborators and is the only writer of
//! the indicator outputs for the duration of a game.
//!
//! All waiting is synchronous busy-polling with blocking sleeps; a call
//! to [`Game::run`] does not return until the game concludes.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use super::lane::{Lane, LaneSet};
use super::{
    FAIL_FLASH_COUNT, FAIL_FLASH_MS, PLAYBACK_GAP_MS, PLAYBACK_ON_MS, ROUND_PAUSE_MS, SETTLE_MS,
};
use crate::config::{GameConfig, MAX_ROUNDS};
use crate::traits::{Buttons, Indicators, LaneSource};

/// How a game ended
///
/// Losing is a defined outcome, not an error: it is reported to the
/// player by the all-lanes failure flash and to the caller by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The pattern reached the round target
    Won,
    /// A press was mismatched or ambiguous
    Lost,
}

/// The game controller
///
/// One instance can run any number of games; each [`Game::run`] call
/// starts from an empty pattern.
pub struct Game<I, B, D, S> {
    indicators: I,
    buttons: B,
    delay: D,
    source: S,
}

impl<I, B, D, S> Game<I, B, D, S>
where
    I: Indicators,
    B: Buttons,
    D: DelayNs,
    S: LaneSource,
{
    /// Create a game controller over the panel collaborators
    pub fn new(indicators: I, buttons: B, delay: D, source: S) -> Self {
        Self {
            indicators,
            buttons,
            delay,
            source,
        }
    }

    /// Run one full game to completion
    ///
    /// Blocks for the game's entire duration. A round target of 0 wins
    /// immediately: no playback, no polling, no delays.
    pub fn run(&mut self, config: &GameConfig) -> Outcome {
        let target = config.round_target() as usize;
        if target == 0 {
            // Explicit contract: an empty target is an immediate win,
            // with no playback and no polling.
            return Outcome::Won;
        }

        let mut pattern: Vec<Lane, MAX_ROUNDS> = Vec::new();

        while pattern.len() < target {
            // Cannot overflow: round_target <= MAX_ROUNDS is checked at
            // config construction.
            let _ = pattern.push(self.source.next_lane());

            self.play(&pattern);
            if !self.capture(&pattern) {
                self.failure_flash();
                return Outcome::Lost;
            }
            self.delay.delay_ms(ROUND_PAUSE_MS);
        }

        Outcome::Won
    }

    /// Playback phase: replay the whole pattern on the lights, in order
    fn play(&mut self, pattern: &[Lane]) {
        for &lane in pattern {
            self.indicators.set(lane, true);
            self.delay.delay_ms(PLAYBACK_ON_MS);
            self.indicators.set(lane, false);
            self.delay.delay_ms(PLAYBACK_GAP_MS);
        }
    }

    /// Capture phase: require the player to press the pattern back
    ///
    /// Returns false on the first mismatched or ambiguous press; the
    /// remaining lanes are not polled.
    fn capture(&mut self, pattern: &[Lane]) -> bool {
        for &expected in pattern {
            let pressed = self.wait_for_press();
            self.delay.delay_ms(SETTLE_MS);

            // Judged on the snapshot taken before the settle delay, not
            // a re-read. A press is accepted only if exactly one lane is
            // active and it is the expected one; a simultaneous
            // multi-lane press fails even if the expected lane is among
            // them.
            if pressed.sole() != Some(expected) {
                return false;
            }

            self.indicators.set(expected, true);
            self.wait_for_release();
            self.indicators.set(expected, false);
        }
        true
    }

    /// Read the active-input set at this instant
    fn scan(&mut self) -> LaneSet {
        let mut active = LaneSet::empty();
        for lane in Lane::all() {
            if self.buttons.is_pressed(lane) {
                active.insert(lane);
            }
        }
        active
    }

    /// Busy-poll until the active-input set is non-empty
    fn wait_for_press(&mut self) -> LaneSet {
        loop {
            let active = self.scan();
            if !active.is_empty() {
                return active;
            }
        }
    }

    /// Busy-poll until the active-input set is empty
    ///
    /// The release-barrier: every lane must read released before the
    /// round advances, not just the lane that was captured.
    fn wait_for_release(&mut self) {
        while !self.scan().is_empty() {
            self.delay.delay_ms(SETTLE_MS);
        }
    }

    /// All-lanes flash signaling a lost game
    fn failure_flash(&mut self) {
        for _ in 0..FAIL_FLASH_COUNT {
            self.indicators.set_all(true);
            self.delay.delay_ms(FAIL_FLASH_MS);
            self.indicators.set_all(false);
            self.delay.delay_ms(FAIL_FLASH_MS);
        }
    }
}
