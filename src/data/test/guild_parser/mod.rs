use crate::data::guild_parser::GuildParserRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod upsert;
