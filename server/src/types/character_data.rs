use shared::Attributes;

/// A resource pool with a current and maximum value.
///
/// `current <= max` is expected but not enforced.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceData {
    pub current: u32,
    pub max: u32,
}

#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionData {
    pub level: u32,
    /// Cumulative; never decreases.
    pub experience: u32,
}

/// The six primary attributes as stored.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributesData {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub sense: u32,
    pub vitality: u32,
    pub luck: u32,
}

impl From<AttributesData> for Attributes {
    fn from(v: AttributesData) -> Self {
        Self {
            strength: v.strength,
            agility: v.agility,
            intelligence: v.intelligence,
            sense: v.sense,
            vitality: v.vitality,
            luck: v.luck,
        }
    }
}

impl From<Attributes> for AttributesData {
    fn from(v: Attributes) -> Self {
        Self {
            strength: v.strength,
            agility: v.agility,
            intelligence: v.intelligence,
            sense: v.sense,
            vitality: v.vitality,
            luck: v.luck,
        }
    }
}
