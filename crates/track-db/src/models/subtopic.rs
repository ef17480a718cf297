//! Subtopic database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for subtopics table
///
/// `difficulty` and `status` are stored as TEXT; parsing is lossy on the
/// way out (unknown difficulty labels collapse to Medium).
#[derive(Debug, Clone, FromRow)]
pub struct SubtopicModel {
    pub id: i64,
    pub topic_id: i64,
    pub name: String,
    pub slug: String,
    pub difficulty: String,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    pub position: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Subtopic row annotated with a per-user completion flag
#[derive(Debug, Clone, FromRow)]
pub struct SubtopicWithCompletionModel {
    pub id: i64,
    pub topic_id: i64,
    pub name: String,
    pub slug: String,
    pub difficulty: String,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    pub position: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_completed: bool,
}
