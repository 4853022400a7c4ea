//! Panel traits: indicator outputs and button inputs
//!
//! Implementations own exactly [`Lane::COUNT`] pins per side, so a
//! lane-count mismatch between logic and hardware is unrepresentable.

use crate::game::Lane;

/// Trait for the lane indicator outputs (one light per lane)
///
/// Implementations handle the electrical drive for the specific board.
pub trait Indicators {
    /// Turn one lane's light on or off
    ///
    /// Must be idempotent, with no observable side effect besides the
    /// physical indicator state.
    fn set(&mut self, lane: Lane, on: bool);

    /// Drive every lane's light to the same state
    fn set_all(&mut self, on: bool) {
        for lane in Lane::all() {
            self.set(lane, on);
        }
    }
}

/// Trait for the lane button inputs (one momentary button per lane)
///
/// "Pressed" is defined by the implementation's electrical convention
/// (active-low on the reference board); callers only see the boolean.
pub trait Buttons {
    /// Read the current pressed/released state of one lane's button
    ///
    /// Takes `&mut self` following the embedded-hal 1.0 input-pin
    /// convention.
    fn is_pressed(&mut self, lane: Lane) -> bool;
}
