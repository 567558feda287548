//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and perform all queries, inserts and
//! updates for their table.

pub mod guild_parser;

#[cfg(test)]
mod test;
