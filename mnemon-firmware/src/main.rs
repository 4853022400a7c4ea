//! Mnemon - Sequence-memory gate firmware
//!
//! Main firmware binary for RP2040-based gate panels. Runs the
//! repeat-the-growing-sequence game on a 4-lane light/button panel and
//! reports the outcome over defmt.
//!
//! Named after the Greek "mnemon" meaning "mindful" - the gate only
//! opens for someone paying attention.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use mnemon_core::config::GameConfig;
use mnemon_core::game::{Game, Outcome};

use crate::panel::{ButtonBank, LedBank, RoscLaneSource};

mod panel;

/// Pattern length the player must reach to pass the gate
const ROUND_TARGET: u16 = 10;

/// Pause between games
const LOBBY_PAUSE_SECS: u64 = 2;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Mnemon firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Config is validated before any pin is driven
    let config = match GameConfig::new(ROUND_TARGET) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid game config: {}", e);
            loop {
                Timer::after_secs(1).await;
            }
        }
    };

    let leds = LedBank::new([
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
    ]);
    let buttons = ButtonBank::new([
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
        Input::new(p.PIN_9, Pull::Up),
    ]);
    info!("Panel initialized, {=u16} rounds to pass", config.round_target());

    let mut game = Game::new(leds, buttons, Delay, RoscLaneSource::new(RoscRng));

    loop {
        info!("Game starting");
        // Blocks until the game concludes; this is the only task driving
        // the panel.
        match game.run(&config) {
            Outcome::Won => info!("Sequence reproduced - gate passed"),
            Outcome::Lost => warn!("Sequence failed - gate stays shut"),
        }
        Timer::after_secs(LOBBY_PAUSE_SECS).await;
    }
}
