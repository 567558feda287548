use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    config::Config,
    error::AppError,
    model::{
        channel::{ChannelIdentity, ChannelKind, GuildSummary},
        command::{CommandInvocation, CommandMessage, GuildContext},
    },
    service::command::CommandService,
};

/// Handle message creation in a channel
///
/// Messages that are not addressed to the bot, or come from bots, are ignored.
pub async fn handle_message(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    let Some(invocation) = CommandInvocation::parse(&message.content, &config.command_prefix)
    else {
        return;
    };

    let (channel, guild) = match channel_context(&ctx, &message).await {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Failed to resolve channel of message {}: {:?}", message.id, e);
            return;
        }
    };

    let identity = ChannelIdentity::resolve(&channel, &message.author.name);
    tracing::debug!(
        "Command {} from {} in {} ({})",
        invocation.name,
        message.author.name,
        identity.name,
        identity.guild_name
    );

    let command_message = CommandMessage {
        author_id: message.author.id.get(),
        content: message.content.clone(),
    };

    let reply = CommandService::new(db, config)
        .interpret(&invocation.name, &command_message, guild.as_ref())
        .await;

    if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
        tracing::error!("Failed to reply in channel {}: {:?}", message.channel_id, e);
    }
}

/// Works out the channel kind and, in guilds, the guild's ownership
///
/// Guild data comes from the cache, falling back to the HTTP API for guilds that are
/// not cached yet.
async fn channel_context(
    ctx: &Context,
    message: &Message,
) -> Result<(ChannelKind, Option<GuildContext>), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok((ChannelKind::DirectMessage, None));
    };

    // The cache guard must be dropped before awaiting
    let cached = message.guild(&ctx.cache).map(|guild| {
        let channel_name = guild
            .channels
            .get(&message.channel_id)
            .map(|channel| channel.name.clone());
        (guild.name.clone(), guild.owner_id, channel_name)
    });

    let (guild_name, owner_id, channel_name) = match cached {
        Some(found) => found,
        None => {
            let guild = guild_id.to_partial_guild(ctx).await?;
            (guild.name, guild.owner_id, None)
        }
    };

    let channel = ChannelKind::Guild {
        // Threads are not part of the guild's channel map
        name: channel_name.unwrap_or_else(|| message.channel_id.to_string()),
        guild: GuildSummary {
            id: guild_id.to_string(),
            name: guild_name,
            owner_id: owner_id.to_string(),
        },
    };

    let context = GuildContext {
        guild_id: guild_id.get(),
        owner_id: owner_id.get(),
    };

    Ok((channel, Some(context)))
}
