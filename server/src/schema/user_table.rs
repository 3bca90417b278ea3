use crate::types::*;
use shared::{display_label, CharacterSheet};
use spacetimedb::*;

/// A hunter's persistent profile and character sheet.
///
/// One row per identity, created the first time that identity connects. Identity fields are
/// written by the auth handshake only; everything else changes through habit completions and
/// stat allocations.
#[table(name = user)]
pub struct UserRow {
    #[primary_key]
    pub identity: Identity,

    pub display_name: String,
    pub email: String,

    pub progression: ProgressionData,
    pub health: ResourceData,
    pub mana: ResourceData,
    pub attributes: AttributesData,

    /// Unspent points available for allocation.
    pub stat_points: u32,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserRow {
    /// A baseline hunter for `identity`.
    pub fn new_hunter(identity: Identity, now: Timestamp) -> Self {
        let sheet = CharacterSheet::new_hunter();
        Self {
            identity,
            display_name: String::new(),
            email: String::new(),
            progression: ProgressionData {
                level: sheet.level,
                experience: sheet.experience,
            },
            health: ResourceData {
                current: sheet.hp,
                max: sheet.max_hp,
            },
            mana: ResourceData {
                current: sheet.mp,
                max: sheet.max_mp,
            },
            attributes: sheet.attributes.into(),
            stat_points: sheet.stat_points,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn sheet(&self) -> CharacterSheet {
        CharacterSheet {
            level: self.progression.level,
            experience: self.progression.experience,
            hp: self.health.current,
            max_hp: self.health.max,
            mp: self.mana.current,
            max_mp: self.mana.max,
            attributes: self.attributes.into(),
            stat_points: self.stat_points,
        }
    }

    pub fn set_sheet(&mut self, sheet: &CharacterSheet) {
        self.progression = ProgressionData {
            level: sheet.level,
            experience: sheet.experience,
        };
        self.health = ResourceData {
            current: sheet.hp,
            max: sheet.max_hp,
        };
        self.mana = ResourceData {
            current: sheet.mp,
            max: sheet.max_mp,
        };
        self.attributes = sheet.attributes.into();
        self.stat_points = sheet.stat_points;
    }

    pub fn display_label(&self) -> String {
        display_label(&self.display_name, &self.email)
    }
}
