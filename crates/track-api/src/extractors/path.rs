//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs and labels from path parameters.

use track_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with a single `id`
#[derive(Debug, serde::Deserialize)]
pub struct IdPath {
    pub id: String,
}

impl IdPath {
    /// Parse id as Snowflake
    pub fn id(&self) -> Result<Snowflake, ApiError> {
        self.id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid id format"))
    }
}

/// Path parameters with a topic slug
#[derive(Debug, serde::Deserialize)]
pub struct SlugPath {
    pub slug: String,
}

/// Path parameters with a topic_id
#[derive(Debug, serde::Deserialize)]
pub struct TopicIdPath {
    pub topic_id: String,
}

impl TopicIdPath {
    /// Parse topic_id as Snowflake
    pub fn topic_id(&self) -> Result<Snowflake, ApiError> {
        self.topic_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid topic_id format"))
    }
}

/// Path parameters with a subtopic_id
#[derive(Debug, serde::Deserialize)]
pub struct SubtopicIdPath {
    pub subtopic_id: String,
}

/// Path parameters with a problem topic label
#[derive(Debug, serde::Deserialize)]
pub struct TopicLabelPath {
    pub topic: String,
}
