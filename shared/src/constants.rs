/// Minimum cumulative experience required for each level.
///
/// Index `i` holds the threshold for level `i + 1`, so level 1 always starts at 0.
/// Values must be strictly increasing.
pub const LEVEL_THRESHOLDS: [u32; 20] = [
    0, 100, 250, 450, 700, 1000, 1350, 1750, 2200, 2700, 3250, 3850, 4500, 5200, 5950, 6750, 7600,
    8500, 9450, 10450,
];

/// Highest level described by [`LEVEL_THRESHOLDS`].
pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Added to the last threshold to produce a "next level" target once the curve runs out.
pub const NEXT_LEVEL_EXTRAPOLATION: u32 = 1000;

/// Unspent points granted for every level gained.
pub const STAT_POINTS_PER_LEVEL: u32 = 3;

/// Max (and current) health gained per point placed into vitality.
pub const VITALITY_HP_RATIO: u32 = 10;

/// Max (and current) mana gained per point placed into intelligence.
pub const INTELLIGENCE_MP_RATIO: u32 = 5;

/// Experience awarded for completing an easy habit.
pub const EASY_XP: u32 = 10;

/// Experience awarded for completing a medium habit.
pub const MEDIUM_XP: u32 = 25;

/// Experience awarded for completing a hard habit.
pub const HARD_XP: u32 = 50;

/// Baseline values for a freshly created hunter.
pub const BASE_HP: u32 = 100;
pub const BASE_MP: u32 = 50;
pub const BASE_ATTRIBUTE: u32 = 10;

/// Window used when counting "recent" completions for the progress summary.
pub const RECENT_COMPLETION_DAYS: i64 = 7;

/// Shown when a hunter has neither a display name nor a usable email.
pub const DEFAULT_DISPLAY_NAME: &str = "Hunter";

/// Reason tag written to the stat history for player driven allocations.
pub const MANUAL_ALLOCATION_REASON: &str = "manual_allocation";
