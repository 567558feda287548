//! Display identity of the channel a message arrived in.

/// Discord guild that owns a guild channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: String,
    pub name: String,
    pub owner_id: String,
}

/// Kind of channel a message was sent in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelKind {
    /// One-to-one private conversation with the bot.
    DirectMessage,
    /// Private conversation between several users, outside of any guild.
    GroupConversation,
    /// Text channel belonging to a guild.
    Guild { name: String, guild: GuildSummary },
}

/// Normalized names and ids describing where a message came from.
///
/// Used for logging; private conversations have no guild so their fields are filled
/// with descriptive text instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelIdentity {
    pub name: String,
    pub guild_name: String,
    pub guild_id: Option<String>,
    pub owner_id: Option<String>,
}

impl ChannelIdentity {
    /// Resolves the identity of `channel` for a message written by `author`.
    pub fn resolve(channel: &ChannelKind, author: &str) -> Self {
        match channel {
            ChannelKind::DirectMessage => {
                let label = format!("Private DM for user {}", author);
                Self {
                    name: label.clone(),
                    guild_name: label.clone(),
                    guild_id: Some(label.clone()),
                    owner_id: Some(label),
                }
            }
            ChannelKind::GroupConversation => Self {
                name: "Group DM".to_string(),
                guild_name: "Group DM".to_string(),
                guild_id: None,
                owner_id: None,
            },
            ChannelKind::Guild { name, guild } => Self {
                name: name.clone(),
                guild_name: guild.name.clone(),
                guild_id: Some(guild.id.clone()),
                owner_id: Some(guild.owner_id.clone()),
            },
        }
    }
}
