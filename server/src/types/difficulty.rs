use shared::Difficulty;

/// Stored difficulty of a habit.
///
/// Mirrors [`shared::Difficulty`]; the experience table lives there.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<DbDifficulty> for Difficulty {
    fn from(value: DbDifficulty) -> Self {
        match value {
            DbDifficulty::Easy => Difficulty::Easy,
            DbDifficulty::Medium => Difficulty::Medium,
            DbDifficulty::Hard => Difficulty::Hard,
        }
    }
}

impl From<Difficulty> for DbDifficulty {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => DbDifficulty::Easy,
            Difficulty::Medium => DbDifficulty::Medium,
            Difficulty::Hard => DbDifficulty::Hard,
        }
    }
}
