//! Value objects - immutable domain primitives

mod slug;
mod snowflake;

pub use slug::{candidate as slug_candidate, slugify};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
