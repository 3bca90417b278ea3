use shared::{Attribute, StatName};

/// A stat as named on the status window.
///
/// Clients may send any of these; only the six primary attributes survive conversion to
/// [`shared::Attribute`].
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbStat {
    Hp,
    Mp,
    Strength,
    Agility,
    Intelligence,
    Sense,
    Vitality,
    Luck,
}

impl From<DbStat> for StatName {
    fn from(value: DbStat) -> Self {
        match value {
            DbStat::Hp => StatName::Hp,
            DbStat::Mp => StatName::Mp,
            DbStat::Strength => StatName::Attribute(Attribute::Strength),
            DbStat::Agility => StatName::Attribute(Attribute::Agility),
            DbStat::Intelligence => StatName::Attribute(Attribute::Intelligence),
            DbStat::Sense => StatName::Attribute(Attribute::Sense),
            DbStat::Vitality => StatName::Attribute(Attribute::Vitality),
            DbStat::Luck => StatName::Attribute(Attribute::Luck),
        }
    }
}
