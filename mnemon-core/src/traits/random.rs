//! Random lane selection trait

use crate::game::Lane;

/// Trait for the source of random lanes appended to the pattern
///
/// Production implementations draw from a hardware entropy source and
/// must be uniform over the lanes; repeats are allowed (the same lane
/// may be chosen consecutively). Tests supply scripted sequences.
pub trait LaneSource {
    /// Produce the next lane to append to the pattern
    fn next_lane(&mut self) -> Lane;
}
