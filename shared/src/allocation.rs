use crate::constants::MANUAL_ALLOCATION_REASON;
use crate::{Attribute, CharacterSheet, ProgressionError, StatName};

/// Audit record of one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatHistoryEntry {
    pub attribute: Attribute,
    pub old_value: u32,
    pub new_value: u32,
    pub reason: &'static str,
}

/// The sheet after an allocation, plus the history record describing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub sheet: CharacterSheet,
    pub history: StatHistoryEntry,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatAllocator;

impl StatAllocator {
    /// Spends `points` unspent stat points on `attribute`.
    ///
    /// Fails with [`ProgressionError::InvalidAllocation`] unless `0 < points <= stat_points`; the
    /// request is never clamped. Vitality and intelligence also grow their resource pool.
    pub fn allocate(
        sheet: &CharacterSheet,
        attribute: Attribute,
        points: u32,
    ) -> Result<Allocation, ProgressionError> {
        if points == 0 || points > sheet.stat_points {
            return Err(ProgressionError::InvalidAllocation {
                requested: points,
                available: sheet.stat_points,
            });
        }

        let mut next = *sheet;
        let old_value = sheet.attributes.get(attribute);
        let new_value = old_value.saturating_add(points);
        *next.attributes.get_mut(attribute) = new_value;
        next.stat_points -= points;

        if let Some(resource) = attribute.derived_resource() {
            next.grow_resource(resource, points.saturating_mul(resource.ratio()));
        }

        Ok(Allocation {
            sheet: next,
            history: StatHistoryEntry {
                attribute,
                old_value,
                new_value,
                reason: MANUAL_ALLOCATION_REASON,
            },
        })
    }

    /// Like [`StatAllocator::allocate`], addressed by status-window stat.
    ///
    /// `hp` and `mp` fail with [`ProgressionError::InvalidStat`] before points are looked at.
    pub fn allocate_stat(
        sheet: &CharacterSheet,
        stat: StatName,
        points: u32,
    ) -> Result<Allocation, ProgressionError> {
        let attribute = Attribute::try_from(stat)?;
        Self::allocate(sheet, attribute, points)
    }
}
