//! Board-agnostic game logic for the Mnemon sequence-memory gate
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (indicators, buttons, lane source)
//! - Lane and lane-set types
//! - The game engine (playback, capture, scoring)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// Host-side tests run with std available
#[cfg(test)]
extern crate std;

pub mod config;
pub mod game;
pub mod traits;
