//! Topic catalog service

use track_core::entities::Topic;
use track_core::{slug_candidate, slugify, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateTopicRequest, PageResponse, TopicResponse, UpdateTopicRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Topic catalog service
pub struct TopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TopicService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List topics name-ordered, with optional name search
    #[instrument(skip(self))]
    pub async fn list_topics(
        &self,
        search: Option<String>,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PageResponse<TopicResponse>> {
        let search = search.as_deref();
        let total = self.ctx.topic_repo().count(search).await?;

        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let topics = self
            .ctx
            .topic_repo()
            .list(search, offset, limit as i64)
            .await?;

        let items = topics.iter().map(TopicResponse::from).collect();
        Ok(PageResponse::new(items, page, limit, total))
    }

    /// Get a topic by ID
    #[instrument(skip(self))]
    pub async fn get_topic(&self, id: Snowflake) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", id.to_string()))?;

        Ok(TopicResponse::from(&topic))
    }

    /// Get a topic by slug
    #[instrument(skip(self))]
    pub async fn get_topic_by_slug(&self, slug: &str) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", slug.to_string()))?;

        Ok(TopicResponse::from(&topic))
    }

    /// Create a topic with a unique name and a disambiguated slug
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_topic(&self, request: CreateTopicRequest) -> ServiceResult<TopicResponse> {
        if self
            .ctx
            .topic_repo()
            .name_exists(&request.name, None)
            .await?
        {
            return Err(ServiceError::conflict("Topic with this name already exists"));
        }

        let mut topic = Topic::new(self.ctx.generate_id(), request.name, request.description);
        topic.slug = self.unique_slug(&topic.slug, None).await?;

        self.ctx.topic_repo().create(&topic).await?;

        info!(topic_id = %topic.id, slug = %topic.slug, "Topic created");
        Ok(TopicResponse::from(&topic))
    }

    /// Update a topic; a rename re-derives the slug
    #[instrument(skip(self, request), fields(topic_id = %id))]
    pub async fn update_topic(
        &self,
        id: Snowflake,
        request: UpdateTopicRequest,
    ) -> ServiceResult<TopicResponse> {
        let mut topic = self
            .ctx
            .topic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", id.to_string()))?;

        if let Some(name) = request.name {
            if name != topic.name
                && self.ctx.topic_repo().name_exists(&name, Some(id)).await?
            {
                return Err(ServiceError::conflict("Topic with this name already exists"));
            }
            if topic.rename(name) {
                topic.slug = self.unique_slug(&slugify(&topic.name), Some(id)).await?;
            }
        }

        if let Some(description) = request.description {
            topic.description = Some(description);
        }
        if let Some(is_active) = request.is_active {
            topic.is_active = is_active;
        }

        self.ctx.topic_repo().update(&topic).await?;

        info!(topic_id = %id, "Topic updated");
        Ok(TopicResponse::from(&topic))
    }

    /// Delete a topic and everything under it
    ///
    /// Completions go first, then subtopics, then the topic row itself.
    #[instrument(skip(self))]
    pub async fn delete_topic(&self, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.topic_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Topic", id.to_string()));
        }

        self.ctx.completion_repo().delete_by_topic(id).await?;
        self.ctx.subtopic_repo().delete_by_topic(id).await?;
        self.ctx.topic_repo().delete(id).await?;

        info!(topic_id = %id, "Topic deleted with subtopics and completions");
        Ok(())
    }

    /// Walk `base`, `base-1`, `base-2`, ... until a free slug is found
    async fn unique_slug(&self, base: &str, exclude: Option<Snowflake>) -> ServiceResult<String> {
        let mut n = 0;
        loop {
            let candidate = slug_candidate(base, n);
            if !self.ctx.topic_repo().slug_exists(&candidate, exclude).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}
