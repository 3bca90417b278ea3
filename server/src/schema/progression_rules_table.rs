use shared::{constants::*, LevelTable};
use spacetimedb::*;

/// Read-only copy of the fixed progression tables, seeded by `init`.
///
/// Single row with `id == 1`.
#[table(name = progression_rules, public)]
pub struct ProgressionRules {
    #[primary_key]
    pub id: u32,

    pub easy_xp: u32,
    pub medium_xp: u32,
    pub hard_xp: u32,

    /// Index `i` is the minimum cumulative experience for level `i + 1`.
    pub level_thresholds: Vec<u32>,
    pub next_level_extrapolation: u32,

    pub stat_points_per_level: u32,
    pub vitality_hp_ratio: u32,
    pub intelligence_mp_ratio: u32,
}

impl ProgressionRules {
    pub const ID: u32 = 1;

    pub fn current() -> Self {
        Self {
            id: Self::ID,
            easy_xp: EASY_XP,
            medium_xp: MEDIUM_XP,
            hard_xp: HARD_XP,
            level_thresholds: LevelTable::thresholds().to_vec(),
            next_level_extrapolation: NEXT_LEVEL_EXTRAPOLATION,
            stat_points_per_level: STAT_POINTS_PER_LEVEL,
            vitality_hp_ratio: VITALITY_HP_RATIO,
            intelligence_mp_ratio: INTELLIGENCE_MP_RATIO,
        }
    }
}
