//! Subtopic catalog service

use track_core::entities::{Difficulty, Subtopic, SubtopicStatus};
use track_core::traits::SubtopicFilter;
use track_core::{slug_candidate, slugify, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateSubtopicRequest, PageResponse, SubtopicResponse, UpdateSubtopicRequest,
    UpdateSubtopicStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Subtopic catalog service
pub struct SubtopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubtopicService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List subtopics position-ordered, honoring search/topic/difficulty/status filters
    #[instrument(skip(self, filter))]
    pub async fn list_subtopics(
        &self,
        filter: SubtopicFilter,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PageResponse<SubtopicResponse>> {
        validate_difficulties(&filter.difficulties)?;

        let total = self.ctx.subtopic_repo().count(&filter).await?;

        let offset = (page.saturating_sub(1) as i64) * limit as i64;
        let subtopics = self
            .ctx
            .subtopic_repo()
            .list(&filter, offset, limit as i64)
            .await?;

        let items = subtopics.iter().map(SubtopicResponse::from).collect();
        Ok(PageResponse::new(items, page, limit, total))
    }

    /// List subtopics under one topic
    #[instrument(skip(self, filter))]
    pub async fn list_by_topic(
        &self,
        topic_id: Snowflake,
        mut filter: SubtopicFilter,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PageResponse<SubtopicResponse>> {
        if self.ctx.topic_repo().find_by_id(topic_id).await?.is_none() {
            return Err(ServiceError::not_found("Topic", topic_id.to_string()));
        }

        filter.topic_id = Some(topic_id);
        self.list_subtopics(filter, page, limit).await
    }

    /// List subtopics whose curated status is `completed`
    #[instrument(skip(self))]
    pub async fn list_completed(
        &self,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PageResponse<SubtopicResponse>> {
        let filter = SubtopicFilter {
            statuses: vec![SubtopicStatus::Completed],
            ..Default::default()
        };
        self.list_subtopics(filter, page, limit).await
    }

    /// Get a subtopic by ID
    #[instrument(skip(self))]
    pub async fn get_subtopic(&self, id: Snowflake) -> ServiceResult<SubtopicResponse> {
        let subtopic = self
            .ctx
            .subtopic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subtopic", id.to_string()))?;

        Ok(SubtopicResponse::from(&subtopic))
    }

    /// Create a subtopic under an existing topic
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_subtopic(
        &self,
        request: CreateSubtopicRequest,
    ) -> ServiceResult<SubtopicResponse> {
        let topic_id = parse_id(&request.topic_id, "Invalid topic ID format")?;

        if self.ctx.topic_repo().find_by_id(topic_id).await?.is_none() {
            return Err(ServiceError::not_found("Topic", topic_id.to_string()));
        }

        if self
            .ctx
            .subtopic_repo()
            .name_exists(topic_id, &request.name, None)
            .await?
        {
            return Err(ServiceError::conflict(
                "Subtopic with this name already exists in this topic",
            ));
        }

        let difficulty = parse_difficulty(request.difficulty.as_deref())?;

        // Positions are unique within a topic; an omitted one lands at the end.
        let position = match request.position {
            Some(position) => {
                if self
                    .ctx
                    .subtopic_repo()
                    .position_exists(topic_id, position, None)
                    .await?
                {
                    return Err(ServiceError::conflict(
                        "Subtopic with this order already exists in this topic",
                    ));
                }
                position
            }
            None => self.ctx.subtopic_repo().next_position(topic_id).await?,
        };

        let mut subtopic = Subtopic::new(
            self.ctx.generate_id(),
            topic_id,
            request.name,
            difficulty,
            position,
        );
        subtopic.slug = self.unique_slug(&subtopic.slug, None).await?;
        subtopic.youtube_link = request.youtube_link;
        subtopic.leetcode_link = request.leetcode_link;
        subtopic.article_link = request.article_link;
        if let Some(status) = request.status.as_deref() {
            subtopic.status = parse_status(status)?;
        }

        self.ctx.subtopic_repo().create(&subtopic).await?;

        info!(subtopic_id = %subtopic.id, topic_id = %topic_id, "Subtopic created");
        Ok(SubtopicResponse::from(&subtopic))
    }

    /// Update a subtopic; a rename re-derives the slug
    #[instrument(skip(self, request), fields(subtopic_id = %id))]
    pub async fn update_subtopic(
        &self,
        id: Snowflake,
        request: UpdateSubtopicRequest,
    ) -> ServiceResult<SubtopicResponse> {
        let mut subtopic = self
            .ctx
            .subtopic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subtopic", id.to_string()))?;

        if let Some(name) = request.name {
            if name != subtopic.name
                && self
                    .ctx
                    .subtopic_repo()
                    .name_exists(subtopic.topic_id, &name, Some(id))
                    .await?
            {
                return Err(ServiceError::conflict(
                    "Subtopic with this name already exists in this topic",
                ));
            }
            if subtopic.rename(name) {
                subtopic.slug = self.unique_slug(&slugify(&subtopic.name), Some(id)).await?;
            }
        }

        if let Some(difficulty) = request.difficulty.as_deref() {
            subtopic.difficulty =
                Difficulty::parse(difficulty).ok_or(DomainError::UnknownDifficulty(
                    difficulty.to_string(),
                ))?;
        }
        if let Some(link) = request.youtube_link {
            subtopic.youtube_link = Some(link);
        }
        if let Some(link) = request.leetcode_link {
            subtopic.leetcode_link = Some(link);
        }
        if let Some(link) = request.article_link {
            subtopic.article_link = Some(link);
        }
        if let Some(position) = request.position {
            if position != subtopic.position
                && self
                    .ctx
                    .subtopic_repo()
                    .position_exists(subtopic.topic_id, position, Some(id))
                    .await?
            {
                return Err(ServiceError::conflict(
                    "Subtopic with this order already exists in this topic",
                ));
            }
            subtopic.position = position;
        }
        if let Some(status) = request.status.as_deref() {
            subtopic.status = parse_status(status)?;
        }

        self.ctx.subtopic_repo().update(&subtopic).await?;

        info!(subtopic_id = %id, "Subtopic updated");
        Ok(SubtopicResponse::from(&subtopic))
    }

    /// Set the curated status of a subtopic
    #[instrument(skip(self, request), fields(subtopic_id = %id))]
    pub async fn update_status(
        &self,
        id: Snowflake,
        request: UpdateSubtopicStatusRequest,
    ) -> ServiceResult<SubtopicResponse> {
        let status = parse_status(&request.status)?;

        let mut subtopic = self
            .ctx
            .subtopic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subtopic", id.to_string()))?;

        subtopic.status = status;
        self.ctx.subtopic_repo().update(&subtopic).await?;

        info!(subtopic_id = %id, status = %subtopic.status.as_str(), "Subtopic status updated");
        Ok(SubtopicResponse::from(&subtopic))
    }

    /// Delete a subtopic and every user's completion of it
    #[instrument(skip(self))]
    pub async fn delete_subtopic(&self, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.subtopic_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Subtopic", id.to_string()));
        }

        self.ctx.completion_repo().delete_by_subtopic(id).await?;
        self.ctx.subtopic_repo().delete(id).await?;

        info!(subtopic_id = %id, "Subtopic deleted with completions");
        Ok(())
    }

    /// Walk `base`, `base-1`, `base-2`, ... until a free slug is found
    async fn unique_slug(&self, base: &str, exclude: Option<Snowflake>) -> ServiceResult<String> {
        let mut n = 0;
        loop {
            let candidate = slug_candidate(base, n);
            if !self
                .ctx
                .subtopic_repo()
                .slug_exists(&candidate, exclude)
                .await?
            {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

fn parse_id(raw: &str, message: &str) -> ServiceResult<Snowflake> {
    Snowflake::parse(raw).map_err(|_| ServiceError::validation(message))
}

fn parse_difficulty(raw: Option<&str>) -> ServiceResult<Difficulty> {
    match raw {
        None => Ok(Difficulty::Medium),
        Some(s) => Difficulty::parse(s)
            .ok_or_else(|| ServiceError::Domain(DomainError::UnknownDifficulty(s.to_string()))),
    }
}

fn parse_status(raw: &str) -> ServiceResult<SubtopicStatus> {
    SubtopicStatus::parse(raw)
        .ok_or_else(|| ServiceError::validation("Status must be 'pending' or 'completed'"))
}

fn validate_difficulties(labels: &[String]) -> ServiceResult<()> {
    for label in labels {
        if Difficulty::parse(label).is_none() {
            return Err(ServiceError::Domain(DomainError::UnknownDifficulty(
                label.clone(),
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty(None).unwrap(), Difficulty::Medium);
        assert_eq!(parse_difficulty(Some("tough")).unwrap(), Difficulty::Tough);
        assert!(parse_difficulty(Some("brutal")).is_err());
    }

    #[test]
    fn test_validate_difficulties_rejects_unknown() {
        assert!(validate_difficulties(&["easy".into(), "medium".into()]).is_ok());
        assert!(validate_difficulties(&["easy".into(), "insane".into()]).is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("completed").unwrap(), SubtopicStatus::Completed);
        assert!(parse_status("done").is_err());
    }
}
