//! Small text helpers shared across layers.

pub mod parse;
pub mod scrape;
pub mod validate;
