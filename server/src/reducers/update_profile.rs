use crate::schema::*;
use spacetimedb::ReducerContext;

/// Stores the display name and email supplied by the auth provider for the caller.
///
/// These fields are never read by the progression rules.
#[spacetimedb::reducer]
pub fn update_profile(
    ctx: &ReducerContext,
    display_name: String,
    email: String,
) -> Result<(), String> {
    let Some(mut user) = ctx.db.user().identity().find(ctx.sender) else {
        return Err("No profile found".into());
    };

    user.display_name = display_name.trim().to_string();
    user.email = email.trim().to_string();
    user.updated_at = ctx.timestamp;
    ctx.db.user().identity().update(user);
    Ok(())
}
