//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Logs the connection and
//! advertises the help command in the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
/// - `prefix` - Command prefix shown in the activity
pub async fn handle_ready(ctx: Context, ready: Ready, prefix: &str) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom(format!("{} help", prefix))));
}
