//! Problem entity <-> model mapper

use track_core::entities::{Problem, ProblemDifficulty};
use track_core::value_objects::Snowflake;

use crate::models::ProblemModel;

/// Convert ProblemModel to Problem entity
impl From<ProblemModel> for Problem {
    fn from(model: ProblemModel) -> Self {
        Problem {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            topic: model.topic,
            subtopic: model.subtopic,
            difficulty: ProblemDifficulty::parse(&model.difficulty).unwrap_or_default(),
            youtube_link: model.youtube_link,
            leetcode_link: model.leetcode_link,
            article_link: model.article_link,
            position: model.position,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Convert Problem entity reference to values for database insertion
pub struct ProblemInsert<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub topic: &'a str,
    pub subtopic: &'a str,
    pub difficulty: &'static str,
    pub youtube_link: Option<&'a str>,
    pub leetcode_link: Option<&'a str>,
    pub article_link: Option<&'a str>,
    pub position: i32,
    pub is_active: bool,
}

impl<'a> ProblemInsert<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            id: problem.id.into_inner(),
            title: &problem.title,
            description: &problem.description,
            topic: &problem.topic,
            subtopic: &problem.subtopic,
            difficulty: problem.difficulty.as_str(),
            youtube_link: problem.youtube_link.as_deref(),
            leetcode_link: problem.leetcode_link.as_deref(),
            article_link: problem.article_link.as_deref(),
            position: problem.position,
            is_active: problem.is_active,
        }
    }
}

/// Convert Problem entity reference to values for database update
pub struct ProblemUpdate<'a> {
    pub id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub difficulty: &'static str,
    pub youtube_link: Option<&'a str>,
    pub leetcode_link: Option<&'a str>,
    pub article_link: Option<&'a str>,
    pub position: i32,
    pub is_active: bool,
}

impl<'a> ProblemUpdate<'a> {
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            id: problem.id.into_inner(),
            title: &problem.title,
            description: &problem.description,
            difficulty: problem.difficulty.as_str(),
            youtube_link: problem.youtube_link.as_deref(),
            leetcode_link: problem.leetcode_link.as_deref(),
            article_link: problem.article_link.as_deref(),
            position: problem.position,
            is_active: problem.is_active,
        }
    }
}
