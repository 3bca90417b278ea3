use super::{AttributesData, ResourceData};

/// The caller's character plus the numbers a level card needs.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, PartialEq)]
pub struct CharacterView {
    pub display_name: String,
    pub email: String,
    pub level: u32,
    pub experience: u32,
    /// Cumulative experience at which the next level starts.
    pub next_level_xp: u32,
    /// `experience / next_level_xp`, unclamped.
    pub progress: f32,
    pub health: ResourceData,
    pub mana: ResourceData,
    pub attributes: AttributesData,
    pub stat_points: u32,
}
