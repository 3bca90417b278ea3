mod character_data;
mod character_view;
mod difficulty;
mod stat;

pub use character_data::{AttributesData, ProgressionData, ResourceData};
pub use character_view::CharacterView;
pub use difficulty::DbDifficulty;
pub use stat::DbStat;
