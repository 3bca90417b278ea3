//! Experience to level lookup.
//!
//! Levels are derived from cumulative experience using [`LEVEL_THRESHOLDS`]. The table is a
//! process-wide constant; nothing here holds state.

use crate::constants::{LEVEL_THRESHOLDS, MAX_LEVEL, NEXT_LEVEL_EXTRAPOLATION};

/// Static threshold lookup over [`LEVEL_THRESHOLDS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelTable;

impl LevelTable {
    /// The raw thresholds, index `i` being the minimum experience for level `i + 1`.
    pub fn thresholds() -> &'static [u32] {
        &LEVEL_THRESHOLDS
    }

    /// Highest level described by the table.
    pub fn max_level() -> u32 {
        MAX_LEVEL
    }

    /// The level reached with `xp` cumulative experience.
    ///
    /// This is the highest level whose threshold is `<= xp`. Never below 1.
    pub fn level_for_xp(xp: u32) -> u32 {
        // Thresholds strictly increase, so the count of crossed thresholds is the level.
        (LEVEL_THRESHOLDS.partition_point(|&req| req <= xp) as u32).max(1)
    }

    /// Cumulative experience needed to reach `level + 1`.
    ///
    /// Past the end of the table the target is extrapolated from the last threshold, so progress
    /// bars always have something to divide by.
    pub fn xp_for_next_level(level: u32) -> u32 {
        match LEVEL_THRESHOLDS.get(level as usize) {
            Some(&xp) => xp,
            None => LEVEL_THRESHOLDS[LEVEL_THRESHOLDS.len() - 1] + NEXT_LEVEL_EXTRAPOLATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_start_at_zero_and_strictly_increase() {
        let t = LevelTable::thresholds();
        assert_eq!(t.len(), 20);
        assert_eq!(t[0], 0);
        assert!(t.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn level_for_xp_matches_known_boundaries() {
        assert_eq!(LevelTable::level_for_xp(0), 1);
        assert_eq!(LevelTable::level_for_xp(99), 1);
        assert_eq!(LevelTable::level_for_xp(100), 2);
        assert_eq!(LevelTable::level_for_xp(249), 2);
        assert_eq!(LevelTable::level_for_xp(250), 3);
        assert_eq!(LevelTable::level_for_xp(10449), 19);
        assert_eq!(LevelTable::level_for_xp(10450), 20);
        assert_eq!(LevelTable::level_for_xp(999_999), 20);
        assert_eq!(LevelTable::level_for_xp(u32::MAX), 20);
    }

    #[test]
    fn level_for_xp_is_monotonic_and_never_below_one() {
        let mut previous = LevelTable::level_for_xp(0);
        for xp in (0..12_000).step_by(7) {
            let level = LevelTable::level_for_xp(xp);
            assert!(level >= 1);
            assert!(level >= previous, "level dropped at xp {xp}");
            previous = level;
        }
    }

    #[test]
    fn every_threshold_is_the_first_xp_of_its_level() {
        for (i, &xp) in LevelTable::thresholds().iter().enumerate() {
            assert_eq!(LevelTable::level_for_xp(xp), i as u32 + 1);
            if xp > 0 {
                assert_eq!(LevelTable::level_for_xp(xp - 1), i as u32);
            }
        }
    }

    #[test]
    fn xp_for_next_level_reads_the_following_threshold() {
        assert_eq!(LevelTable::xp_for_next_level(1), 100);
        assert_eq!(LevelTable::xp_for_next_level(2), 250);
        assert_eq!(LevelTable::xp_for_next_level(19), 10450);
    }

    #[test]
    fn xp_for_next_level_extrapolates_past_the_table() {
        assert_eq!(LevelTable::xp_for_next_level(20), 11450);
        assert_eq!(LevelTable::xp_for_next_level(45), 11450);
    }
}
