//! Completion record - join entity between a user and a subtopic
//!
//! Existence of a record means "completed". At most one record per
//! (user, subtopic) pair, enforced by a database uniqueness constraint.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Per-user completion record for a subtopic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub user_id: Snowflake,
    pub subtopic_id: Snowflake,
    pub completed_at: DateTime<Utc>,
}

impl Completion {
    pub fn new(user_id: Snowflake, subtopic_id: Snowflake) -> Self {
        Self {
            user_id,
            subtopic_id,
            completed_at: Utc::now(),
        }
    }
}
