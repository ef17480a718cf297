//! Problem database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for problems table
#[derive(Debug, Clone, FromRow)]
pub struct ProblemModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub subtopic: String,
    pub difficulty: String,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
