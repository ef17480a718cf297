//! Topic entity <-> model mapper

use track_core::entities::Topic;
use track_core::value_objects::Snowflake;

use crate::models::TopicModel;

/// Convert TopicModel to Topic entity
impl From<TopicModel> for Topic {
    fn from(model: TopicModel) -> Self {
        Topic {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            description: model.description,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Topic entity reference to values for database insertion
pub struct TopicInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}

impl<'a> TopicInsert<'a> {
    pub fn new(topic: &'a Topic) -> Self {
        Self {
            id: topic.id.into_inner(),
            name: &topic.name,
            slug: &topic.slug,
            description: topic.description.as_deref(),
            is_active: topic.is_active,
        }
    }
}

/// Convert Topic entity reference to values for database update
pub struct TopicUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub is_active: bool,
}

impl<'a> TopicUpdate<'a> {
    pub fn new(topic: &'a Topic) -> Self {
        Self {
            id: topic.id.into_inner(),
            name: &topic.name,
            slug: &topic.slug,
            description: topic.description.as_deref(),
            is_active: topic.is_active,
        }
    }
}
