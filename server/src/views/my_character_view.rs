use crate::{schema::*, types::CharacterView};
use shared::{LevelTable, ProgressionEngine};
use spacetimedb::ViewContext;

/// The caller's character sheet with level-card numbers.
#[spacetimedb::view(name = my_character, public)]
pub fn my_character(ctx: &ViewContext) -> Option<CharacterView> {
    let user = ctx.db.user().identity().find(ctx.sender)?;
    let sheet = user.sheet();

    Some(CharacterView {
        display_name: user.display_label(),
        email: user.email.clone(),
        level: sheet.level,
        experience: sheet.experience,
        next_level_xp: LevelTable::xp_for_next_level(sheet.level),
        progress: ProgressionEngine::progress_fraction(&sheet),
        health: user.health,
        mana: user.mana,
        attributes: user.attributes,
        stat_points: sheet.stat_points,
    })
}
