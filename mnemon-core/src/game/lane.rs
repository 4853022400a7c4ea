//! Lane identifiers and the active-input set
//!
//! A lane is one paired (light, button) unit on the panel. The panel has
//! exactly [`Lane::COUNT`] lanes; every lane value is in range by
//! construction.

/// One (light, button) pair on the panel, identified by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lane(u8);

impl Lane {
    /// Number of lanes on the panel
    pub const COUNT: u8 = 4;

    /// Create a lane from an index, if it is in range
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Lane from an arbitrary word, reduced modulo the lane count
    ///
    /// `COUNT` divides 2^32, so a uniform `raw` gives a uniform lane.
    pub const fn from_wrapped(raw: u32) -> Self {
        Self((raw % Self::COUNT as u32) as u8)
    }

    /// Index of this lane, for addressing pin arrays
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all lanes in index order
    pub fn all() -> impl Iterator<Item = Lane> {
        (0..Self::COUNT).map(Lane)
    }
}

/// Set of lanes sensed as pressed at one poll instant.
///
/// Recomputed on every poll; never persisted between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaneSet(u8);

impl LaneSet {
    /// Create an empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a lane to the set
    pub fn insert(&mut self, lane: Lane) {
        self.0 |= 1 << lane.0;
    }

    /// Check if a lane is in the set
    pub const fn contains(self, lane: Lane) -> bool {
        self.0 & (1 << lane.0) != 0
    }

    /// Number of lanes in the set
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Check if no lane is pressed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The unique member, if the set holds exactly one lane
    pub const fn sole(self) -> Option<Lane> {
        if self.0.count_ones() == 1 {
            Some(Lane(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }
}

impl FromIterator<Lane> for LaneSet {
    fn from_iter<T: IntoIterator<Item = Lane>>(iter: T) -> Self {
        let mut set = Self::empty();
        for lane in iter {
            set.insert(lane);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_bounds() {
        assert_eq!(Lane::new(0).map(Lane::index), Some(0));
        assert_eq!(Lane::new(3).map(Lane::index), Some(3));
        assert_eq!(Lane::new(4), None);
        assert_eq!(Lane::new(255), None);
    }

    #[test]
    fn test_lane_from_wrapped() {
        assert_eq!(Lane::from_wrapped(0), Lane::new(0).unwrap());
        assert_eq!(Lane::from_wrapped(5), Lane::new(1).unwrap());
        assert_eq!(Lane::from_wrapped(u32::MAX), Lane::new(3).unwrap());
    }

    #[test]
    fn test_lane_all_in_order() {
        let lanes: std::vec::Vec<usize> = Lane::all().map(Lane::index).collect();
        assert_eq!(lanes, [0, 1, 2, 3]);
    }

    #[test]
    fn test_set_insert_contains() {
        let mut set = LaneSet::empty();
        assert!(set.is_empty());

        let lane = Lane::new(2).unwrap();
        set.insert(lane);
        assert!(set.contains(lane));
        assert!(!set.contains(Lane::new(0).unwrap()));
        assert_eq!(set.len(), 1);

        // Inserting twice is a no-op
        set.insert(lane);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sole() {
        let mut set = LaneSet::empty();
        assert_eq!(set.sole(), None);

        set.insert(Lane::new(1).unwrap());
        assert_eq!(set.sole(), Lane::new(1));

        set.insert(Lane::new(3).unwrap());
        assert_eq!(set.sole(), None);
    }
}
