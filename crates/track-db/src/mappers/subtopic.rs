//! Subtopic entity <-> model mappers

use track_core::entities::{Difficulty, Subtopic, SubtopicStatus};
use track_core::value_objects::Snowflake;

use crate::models::{SubtopicModel, SubtopicWithCompletionModel};

/// Convert SubtopicModel to Subtopic entity
impl From<SubtopicModel> for Subtopic {
    fn from(model: SubtopicModel) -> Self {
        Subtopic {
            id: Snowflake::new(model.id),
            topic_id: Snowflake::new(model.topic_id),
            name: model.name,
            slug: model.slug,
            difficulty: Difficulty::parse_lossy(&model.difficulty),
            youtube_link: model.youtube_link,
            leetcode_link: model.leetcode_link,
            article_link: model.article_link,
            position: model.position,
            status: SubtopicStatus::parse(&model.status).unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split an annotated row into a subtopic and its completion flag
pub fn subtopic_with_completion(model: SubtopicWithCompletionModel) -> (Subtopic, bool) {
    let is_completed = model.is_completed;
    let subtopic = Subtopic {
        id: Snowflake::new(model.id),
        topic_id: Snowflake::new(model.topic_id),
        name: model.name,
        slug: model.slug,
        difficulty: Difficulty::parse_lossy(&model.difficulty),
        youtube_link: model.youtube_link,
        leetcode_link: model.leetcode_link,
        article_link: model.article_link,
        position: model.position,
        status: SubtopicStatus::parse(&model.status).unwrap_or_default(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    };
    (subtopic, is_completed)
}

/// Convert Subtopic entity reference to values for database insertion
pub struct SubtopicInsert<'a> {
    pub id: i64,
    pub topic_id: i64,
    pub name: &'a str,
    pub slug: &'a str,
    pub difficulty: &'static str,
    pub youtube_link: Option<&'a str>,
    pub leetcode_link: Option<&'a str>,
    pub article_link: Option<&'a str>,
    pub position: i32,
    pub status: &'static str,
}

impl<'a> SubtopicInsert<'a> {
    pub fn new(subtopic: &'a Subtopic) -> Self {
        Self {
            id: subtopic.id.into_inner(),
            topic_id: subtopic.topic_id.into_inner(),
            name: &subtopic.name,
            slug: &subtopic.slug,
            difficulty: subtopic.difficulty.as_str(),
            youtube_link: subtopic.youtube_link.as_deref(),
            leetcode_link: subtopic.leetcode_link.as_deref(),
            article_link: subtopic.article_link.as_deref(),
            position: subtopic.position,
            status: subtopic.status.as_str(),
        }
    }
}

/// Convert Subtopic entity reference to values for database update
pub struct SubtopicUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub slug: &'a str,
    pub difficulty: &'static str,
    pub youtube_link: Option<&'a str>,
    pub leetcode_link: Option<&'a str>,
    pub article_link: Option<&'a str>,
    pub position: i32,
    pub status: &'static str,
}

impl<'a> SubtopicUpdate<'a> {
    pub fn new(subtopic: &'a Subtopic) -> Self {
        Self {
            id: subtopic.id.into_inner(),
            name: &subtopic.name,
            slug: &subtopic.slug,
            difficulty: subtopic.difficulty.as_str(),
            youtube_link: subtopic.youtube_link.as_deref(),
            leetcode_link: subtopic.leetcode_link.as_deref(),
            article_link: subtopic.article_link.as_deref(),
            position: subtopic.position,
            status: subtopic.status.as_str(),
        }
    }
}
