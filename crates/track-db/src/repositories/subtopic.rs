//! PostgreSQL implementation of SubtopicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::Subtopic;
use track_core::error::DomainError;
use track_core::traits::{RepoResult, SubtopicFilter, SubtopicRepository};
use track_core::value_objects::Snowflake;

use crate::mappers::{subtopic_with_completion, SubtopicInsert, SubtopicUpdate};
use crate::models::{SubtopicModel, SubtopicWithCompletionModel};

use super::error::{map_db_error, map_named_unique_violation, subtopic_not_found};

const SUBTOPIC_COLUMNS: &str = "id, topic_id, name, slug, difficulty, youtube_link, \
     leetcode_link, article_link, position, status, created_at, updated_at";

/// PostgreSQL implementation of SubtopicRepository
#[derive(Clone)]
pub struct PgSubtopicRepository {
    pool: PgPool,
}

impl PgSubtopicRepository {
    /// Create a new PgSubtopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_subtopic_violation(e: sqlx::Error) -> DomainError {
    map_named_unique_violation(e, |constraint| match constraint {
        Some("idx_subtopics_topic_position") => DomainError::SubtopicOrderExists,
        _ => DomainError::SubtopicNameExists,
    })
}

fn status_labels(filter: &SubtopicFilter) -> Vec<String> {
    filter
        .statuses
        .iter()
        .map(|s| s.as_str().to_string())
        .collect()
}

#[async_trait]
impl SubtopicRepository for PgSubtopicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Subtopic>> {
        let result = sqlx::query_as::<_, SubtopicModel>(&format!(
            "SELECT {SUBTOPIC_COLUMNS} FROM subtopics WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Subtopic::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(
        &self,
        topic_id: Snowflake,
        name: &str,
        exclude: Option<Snowflake>,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM subtopics
                WHERE topic_id = $1
                  AND lower(name) = lower($2)
                  AND ($3::bigint IS NULL OR id <> $3)
            )
            ",
        )
        .bind(topic_id.into_inner())
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
                SELECT 1 FROM subtopics
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
    async fn position_exists(
        &self,
        topic_id: Snowflake,
        position: i32,
        exclude: Option<Snowflake>,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM subtopics
                WHERE topic_id = $1
                  AND position = $2
                  AND ($3::bigint IS NULL OR id <> $3)
            )
            ",
        )
        .bind(topic_id.into_inner())
        .bind(position)
        .bind(exclude.map(Snowflake::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn next_position(&self, topic_id: Snowflake) -> RepoResult<i32> {
        let result = sqlx::query_scalar::<_, i32>(
            "SELECT COALESCE(MAX(position), 0) + 1 FROM subtopics WHERE topic_id = $1",
        )
        .bind(topic_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, subtopic: &Subtopic) -> RepoResult<()> {
        let insert = SubtopicInsert::new(subtopic);

        sqlx::query(
            r"
            INSERT INTO subtopics (id, topic_id, name, slug, difficulty, youtube_link,
                                   leetcode_link, article_link, position, status,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(insert.id)
        .bind(insert.topic_id)
        .bind(insert.name)
        .bind(insert.slug)
        .bind(insert.difficulty)
        .bind(insert.youtube_link)
        .bind(insert.leetcode_link)
        .bind(insert.article_link)
        .bind(insert.position)
        .bind(insert.status)
        .bind(subtopic.created_at)
        .bind(subtopic.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_subtopic_violation)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, subtopic: &Subtopic) -> RepoResult<()> {
        let update = SubtopicUpdate::new(subtopic);

        let result = sqlx::query(
            r"
            UPDATE subtopics
            SET name = $2, slug = $3, difficulty = $4, youtube_link = $5,
                leetcode_link = $6, article_link = $7, position = $8, status = $9,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.name)
        .bind(update.slug)
        .bind(update.difficulty)
        .bind(update.youtube_link)
        .bind(update.leetcode_link)
        .bind(update.article_link)
        .bind(update.position)
        .bind(update.status)
        .execute(&self.pool)
        .await
        .map_err(map_subtopic_violation)?;

        if result.rows_affected() == 0 {
            return Err(subtopic_not_found(subtopic.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM subtopics WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(subtopic_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_topic(&self, topic_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM subtopics WHERE topic_id = $1")
            .bind(topic_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &SubtopicFilter) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM subtopics
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::bigint IS NULL OR topic_id = $2)
              AND (cardinality($3::text[]) = 0 OR difficulty = ANY($3))
              AND (cardinality($4::text[]) = 0 OR status = ANY($4))
            ",
        )
        .bind(filter.search.as_deref())
        .bind(filter.topic_id.map(Snowflake::into_inner))
        .bind(&filter.difficulties)
        .bind(status_labels(filter))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &SubtopicFilter,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Subtopic>> {
        let rows = sqlx::query_as::<_, SubtopicModel>(&format!(
            r"
            SELECT {SUBTOPIC_COLUMNS} FROM subtopics
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::bigint IS NULL OR topic_id = $2)
              AND (cardinality($3::text[]) = 0 OR difficulty = ANY($3))
              AND (cardinality($4::text[]) = 0 OR status = ANY($4))
            ORDER BY position, id
            OFFSET $5 LIMIT $6
            "
        ))
        .bind(filter.search.as_deref())
        .bind(filter.topic_id.map(Snowflake::into_inner))
        .bind(&filter.difficulties)
        .bind(status_labels(filter))
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Subtopic::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_with_completion(
        &self,
        user_id: Option<Snowflake>,
    ) -> RepoResult<Vec<(Subtopic, bool)>> {
        // A NULL user id joins to nothing, so every row annotates false.
        let rows = sqlx::query_as::<_, SubtopicWithCompletionModel>(
            r"
            SELECT s.id, s.topic_id, s.name, s.slug, s.difficulty, s.youtube_link,
                   s.leetcode_link, s.article_link, s.position, s.status,
                   s.created_at, s.updated_at,
                   (c.user_id IS NOT NULL) AS is_completed
            FROM subtopics s
            JOIN topics t ON t.id = s.topic_id AND t.is_active
            LEFT JOIN completions c
                   ON c.subtopic_id = s.id AND c.user_id = $1
            ORDER BY t.name, s.position, s.id
            ",
        )
        .bind(user_id.map(Snowflake::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(subtopic_with_completion).collect())
    }

    #[instrument(skip(self))]
    async fn count_grouped_by_difficulty(&self) -> RepoResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT difficulty, COUNT(*) FROM subtopics GROUP BY difficulty",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn count_all(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subtopics")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }
}
