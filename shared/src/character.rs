//! The hunter's character sheet and the closed set of stats it exposes.

use std::fmt;
use std::str::FromStr;

use crate::ProgressionError;
use crate::constants::{
    BASE_ATTRIBUTE, BASE_HP, BASE_MP, DEFAULT_DISPLAY_NAME, INTELLIGENCE_MP_RATIO,
    VITALITY_HP_RATIO,
};

/// A primary attribute that stat points can be placed into.
///
/// `hp` and `mp` are deliberately absent: they are resources, not attributes, and can only grow
/// as a side effect of [`Attribute::Vitality`] and [`Attribute::Intelligence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
    Sense,
    Vitality,
    Luck,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intelligence,
        Attribute::Sense,
        Attribute::Vitality,
        Attribute::Luck,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Agility => "agility",
            Attribute::Intelligence => "intelligence",
            Attribute::Sense => "sense",
            Attribute::Vitality => "vitality",
            Attribute::Luck => "luck",
        }
    }

    /// The resource pool that grows alongside this attribute, if any.
    pub fn derived_resource(self) -> Option<DerivedResource> {
        match self {
            Attribute::Vitality => Some(DerivedResource::Health),
            Attribute::Intelligence => Some(DerivedResource::Mana),
            Attribute::Strength | Attribute::Agility | Attribute::Sense | Attribute::Luck => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<StatName>()?.try_into()
    }
}

/// Every stat shown on the status window, allocatable or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatName {
    Hp,
    Mp,
    Attribute(Attribute),
}

impl StatName {
    pub fn as_str(self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Mp => "mp",
            StatName::Attribute(attribute) => attribute.as_str(),
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatName {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hp" => Ok(StatName::Hp),
            "mp" => Ok(StatName::Mp),
            _ => Attribute::ALL
                .into_iter()
                .find(|a| a.as_str() == s)
                .map(StatName::Attribute)
                .ok_or_else(|| ProgressionError::InvalidStat(s.to_string())),
        }
    }
}

impl TryFrom<StatName> for Attribute {
    type Error = ProgressionError;

    fn try_from(stat: StatName) -> Result<Self, Self::Error> {
        match stat {
            StatName::Attribute(attribute) => Ok(attribute),
            StatName::Hp | StatName::Mp => Err(ProgressionError::InvalidStat(stat.to_string())),
        }
    }
}

/// A resource pool whose maximum follows a primary attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedResource {
    Health,
    Mana,
}

impl DerivedResource {
    /// How much max (and current) value one allocated point adds.
    pub fn ratio(self) -> u32 {
        match self {
            DerivedResource::Health => VITALITY_HP_RATIO,
            DerivedResource::Mana => INTELLIGENCE_MP_RATIO,
        }
    }
}

/// The six primary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub sense: u32,
    pub vitality: u32,
    pub luck: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: BASE_ATTRIBUTE,
            agility: BASE_ATTRIBUTE,
            intelligence: BASE_ATTRIBUTE,
            sense: BASE_ATTRIBUTE,
            vitality: BASE_ATTRIBUTE,
            luck: BASE_ATTRIBUTE,
        }
    }
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Sense => self.sense,
            Attribute::Vitality => self.vitality,
            Attribute::Luck => self.luck,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Sense => &mut self.sense,
            Attribute::Vitality => &mut self.vitality,
            Attribute::Luck => &mut self.luck,
        }
    }
}

/// Everything about a hunter that the progression rules read or write.
///
/// `hp <= max_hp` and `mp <= max_mp` are expected but never enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSheet {
    pub level: u32,
    pub experience: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attributes: Attributes,
    pub stat_points: u32,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new_hunter()
    }
}

impl CharacterSheet {
    /// The sheet every hunter starts with at first sign-in.
    pub fn new_hunter() -> Self {
        Self {
            level: 1,
            experience: 0,
            hp: BASE_HP,
            max_hp: BASE_HP,
            mp: BASE_MP,
            max_mp: BASE_MP,
            attributes: Attributes::default(),
            stat_points: 0,
        }
    }

    /// Current value of any status-window stat.
    pub fn stat(&self, stat: StatName) -> u32 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Mp => self.mp,
            StatName::Attribute(attribute) => self.attributes.get(attribute),
        }
    }

    /// Grows a derived resource's max and current value together.
    pub(crate) fn grow_resource(&mut self, resource: DerivedResource, amount: u32) {
        let (current, max) = match resource {
            DerivedResource::Health => (&mut self.hp, &mut self.max_hp),
            DerivedResource::Mana => (&mut self.mp, &mut self.max_mp),
        };
        *max = max.saturating_add(amount);
        *current = current.saturating_add(amount);
    }
}

/// Name to show for a hunter: display name, then the email's local part, then a fixed fallback.
pub fn display_label(display_name: &str, email: &str) -> String {
    let display_name = display_name.trim();
    if !display_name.is_empty() {
        return display_name.to_string();
    }

    let local = email.split('@').next().unwrap_or_default().trim();
    if !local.is_empty() {
        return local.to_string();
    }

    DEFAULT_DISPLAY_NAME.to_string()
}
