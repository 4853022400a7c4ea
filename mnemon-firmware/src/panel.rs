//! RP2040 implementations of the panel collaborators
//!
//! The reference board wires four LEDs on GPIO 0-3 (driven active-high)
//! and four momentary buttons on GPIO 6-9 with internal pull-ups, so a
//! pressed button reads low.

use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Output};
use rand_core::RngCore;

use mnemon_core::game::Lane;
use mnemon_core::traits::{Buttons, Indicators, LaneSource};

const LANES: usize = Lane::COUNT as usize;

/// LED bank, one output per lane
pub struct LedBank {
    pins: [Output<'static>; LANES],
}

impl LedBank {
    /// Take ownership of the lane LED outputs, in lane order
    pub fn new(pins: [Output<'static>; LANES]) -> Self {
        Self { pins }
    }
}

impl Indicators for LedBank {
    fn set(&mut self, lane: Lane, on: bool) {
        if on {
            self.pins[lane.index()].set_high();
        } else {
            self.pins[lane.index()].set_low();
        }
    }
}

/// Button bank, one pull-up input per lane
pub struct ButtonBank {
    pins: [Input<'static>; LANES],
}

impl ButtonBank {
    /// Take ownership of the lane button inputs, in lane order
    pub fn new(pins: [Input<'static>; LANES]) -> Self {
        Self { pins }
    }
}

impl Buttons for ButtonBank {
    fn is_pressed(&mut self, lane: Lane) -> bool {
        // Pull-up wiring: pressed shorts the pin to ground
        self.pins[lane.index()].is_low()
    }
}

/// Uniform lane source over the ring-oscillator RNG
pub struct RoscLaneSource {
    rng: RoscRng,
}

impl RoscLaneSource {
    pub fn new(rng: RoscRng) -> Self {
        Self { rng }
    }
}

impl LaneSource for RoscLaneSource {
    fn next_lane(&mut self) -> Lane {
        // The lane count divides 2^32, so the reduction is unbiased
        Lane::from_wrapped(self.rng.next_u32())
    }
}
