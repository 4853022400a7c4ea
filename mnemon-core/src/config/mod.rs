//! Configuration type definitions
//!
//! Configuration is validated at construction, before any hardware is
//! driven. A validated [`GameConfig`] cannot describe a game the engine
//! is unable to run.

/// Maximum rounds per game (capacity of the pattern buffer)
pub const MAX_ROUNDS: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Round target exceeds the pattern buffer capacity
    TargetTooLong,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Pattern length at which the game is won
    round_target: u16,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// A `round_target` of 0 is legal and means the game is won
    /// immediately. Targets beyond [`MAX_ROUNDS`] are rejected because
    /// the pattern buffer could not hold the winning sequence.
    pub fn new(round_target: u16) -> Result<Self, ConfigError> {
        if round_target as usize > MAX_ROUNDS {
            return Err(ConfigError::TargetTooLong);
        }
        Ok(Self { round_target })
    }

    /// The pattern length at which the game is won
    pub const fn round_target(&self) -> u16 {
        self.round_target
    }
}
