//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use track_core::entities::{Problem, Subtopic, Topic, User};

use super::responses::{
    ProblemResponse, SubtopicResponse, SubtopicWithCompletionResponse, TopicResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Topic Mappers
// ============================================================================

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.to_string(),
            name: topic.name.clone(),
            slug: topic.slug.clone(),
            description: topic.description.clone(),
            is_active: topic.is_active,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self::from(&topic)
    }
}

// ============================================================================
// Subtopic Mappers
// ============================================================================

impl From<&Subtopic> for SubtopicResponse {
    fn from(subtopic: &Subtopic) -> Self {
        Self {
            id: subtopic.id.to_string(),
            topic_id: subtopic.topic_id.to_string(),
            name: subtopic.name.clone(),
            slug: subtopic.slug.clone(),
            difficulty: subtopic.difficulty.as_str().to_string(),
            youtube_link: subtopic.youtube_link.clone(),
            leetcode_link: subtopic.leetcode_link.clone(),
            article_link: subtopic.article_link.clone(),
            position: subtopic.position,
            status: subtopic.status.as_str().to_string(),
            created_at: subtopic.created_at,
            updated_at: subtopic.updated_at,
        }
    }
}

impl From<Subtopic> for SubtopicResponse {
    fn from(subtopic: Subtopic) -> Self {
        Self::from(&subtopic)
    }
}

/// Pair a subtopic with its per-user completion flag
pub fn subtopic_with_completion(
    subtopic: &Subtopic,
    is_completed: bool,
) -> SubtopicWithCompletionResponse {
    SubtopicWithCompletionResponse {
        subtopic: SubtopicResponse::from(subtopic),
        is_completed,
    }
}

// ============================================================================
// Problem Mappers
// ============================================================================

impl From<&Problem> for ProblemResponse {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id.to_string(),
            title: problem.title.clone(),
            description: problem.description.clone(),
            topic: problem.topic.clone(),
            subtopic: problem.subtopic.clone(),
            difficulty: problem.difficulty.as_str().to_string(),
            youtube_link: problem.youtube_link.clone(),
            leetcode_link: problem.leetcode_link.clone(),
            article_link: problem.article_link.clone(),
            position: problem.position,
            is_active: problem.is_active,
            created_at: problem.created_at,
        }
    }
}

impl From<Problem> for ProblemResponse {
    fn from(problem: Problem) -> Self {
        Self::from(&problem)
    }
}
