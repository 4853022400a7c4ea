//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic and
//! hardware-specific implementations. Delays use the blocking
//! [`embedded_hal::delay::DelayNs`] trait from the wider ecosystem.

pub mod panel;
pub mod random;

pub use panel::{Buttons, Indicators};
pub use random::LaneSource;

// Re-export the delay trait the engine is generic over
pub use embedded_hal::delay::DelayNs;
