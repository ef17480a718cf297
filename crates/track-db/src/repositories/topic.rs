//! PostgreSQL implementation of TopicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::Topic;
use track_core::error::DomainError;
use track_core::traits::{RepoResult, TopicRepository};
use track_core::value_objects::Snowflake;

use crate::mappers::{TopicInsert, TopicUpdate};
use crate::models::TopicModel;

use super::error::{map_db_error, map_unique_violation, topic_not_found};

const TOPIC_COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

/// PostgreSQL implementation of TopicRepository
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Topic>> {
        let rows = sqlx::query_as::<_, TopicModel>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE is_active ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, exclude: Option<Snowflake>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM topics
                WHERE lower(name) = lower($1) AND ($2::bigint IS NULL OR id <> $2)
            )
            ",
        )
        .bind(name)
        .bind(exclude.map(Snowflake::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn slug_exists(&self, slug: &str, exclude: Option<Snowflake>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM topics
                WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2)
            )
            ",
        )
        .bind(slug)
        .bind(exclude.map(Snowflake::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, topic: &Topic) -> RepoResult<()> {
        let insert = TopicInsert::new(topic);

        sqlx::query(
            r"
            INSERT INTO topics (id, name, slug, description, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.slug)
        .bind(insert.description)
        .bind(insert.is_active)
        .bind(topic.created_at)
        .bind(topic.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TopicNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, topic: &Topic) -> RepoResult<()> {
        let update = TopicUpdate::new(topic);

        let result = sqlx::query(
            r"
            UPDATE topics
            SET name = $2, slug = $3, description = $4, is_active = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.name)
        .bind(update.slug)
        .bind(update.description)
        .bind(update.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TopicNameExists))?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(topic.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, search: Option<&str>) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM topics
            WHERE $1::text IS NULL
               OR name ILIKE '%' || $1 || '%'
               OR description ILIKE '%' || $1 || '%'
            ",
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<&str>, offset: i64, limit: i64) -> RepoResult<Vec<Topic>> {
        let rows = sqlx::query_as::<_, TopicModel>(&format!(
            r"
            SELECT {TOPIC_COLUMNS} FROM topics
            WHERE $1::text IS NULL
               OR name ILIKE '%' || $1 || '%'
               OR description ILIKE '%' || $1 || '%'
            ORDER BY name
            OFFSET $2 LIMIT $3
            "
        ))
        .bind(search)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Topic::from).collect())
    }
}
