use crate::constants::STAT_POINTS_PER_LEVEL;
use crate::{CharacterSheet, LevelTable};

/// Result of granting experience to a character. Nothing is written until the caller applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceAward {
    pub new_experience: u32,
    pub new_level: u32,
    pub leveled_up: bool,
    pub stat_points_awarded: u32,
}

impl ExperienceAward {
    /// Writes the award onto `sheet`.
    pub fn apply(&self, sheet: &mut CharacterSheet) {
        sheet.experience = self.new_experience;
        sheet.level = self.new_level;
        sheet.stat_points = sheet.stat_points.saturating_add(self.stat_points_awarded);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressionEngine;

impl ProgressionEngine {
    /// Adds `amount` experience and works out the level and stat points that follow.
    ///
    /// Multi-level jumps award [`STAT_POINTS_PER_LEVEL`] for every level crossed.
    pub fn award_experience(sheet: &CharacterSheet, amount: u32) -> ExperienceAward {
        let new_experience = sheet.experience.saturating_add(amount);
        let new_level = LevelTable::level_for_xp(new_experience);
        let leveled_up = new_level > sheet.level;
        let stat_points_awarded = if leveled_up {
            (new_level - sheet.level) * STAT_POINTS_PER_LEVEL
        } else {
            0
        };

        ExperienceAward {
            new_experience,
            new_level,
            leveled_up,
            stat_points_awarded,
        }
    }

    /// Fraction of the way to the next level target.
    ///
    /// Not clamped: a sheet whose level is stale relative to its experience can report `>= 1.0`.
    pub fn progress_fraction(sheet: &CharacterSheet) -> f32 {
        let target = LevelTable::xp_for_next_level(sheet.level.max(1));
        sheet.experience as f32 / target as f32
    }
}
