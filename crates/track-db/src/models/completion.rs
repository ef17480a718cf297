//! Completion database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for completions table (one row per user/subtopic pair)
#[derive(Debug, Clone, FromRow)]
pub struct CompletionModel {
    pub user_id: i64,
    pub subtopic_id: i64,
    pub completed_at: DateTime<Utc>,
}
