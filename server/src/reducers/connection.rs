//! Connection lifecycle reducers.
//!
//! A connecting identity is the auth collaborator's "signed in" signal. The first time an identity
//! connects it gets a baseline hunter profile; reconnects leave the stored profile untouched.
//! Disconnecting never deletes anything.

use crate::schema::*;
use spacetimedb::{ReducerContext, Table};

/// Fired when a client connects to the module.
///
/// Ensures a `user` row exists so every other reducer can rely on it.
#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    log::info!("Client connected: {:?}", ctx.sender);

    if ctx.db.user().identity().find(ctx.sender).is_some() {
        return;
    }

    ctx.db
        .user()
        .insert(UserRow::new_hunter(ctx.sender, ctx.timestamp));
    log::info!("Created hunter profile for {:?}", ctx.sender);
}

/// Fired when a client disconnects from the module.
#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);
}
