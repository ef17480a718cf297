//! PostgreSQL implementation of CompletionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::Completion;
use track_core::error::DomainError;
use track_core::traits::{CompletionRepository, RepoResult};
use track_core::value_objects::Snowflake;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CompletionRepository
#[derive(Clone)]
pub struct PgCompletionRepository {
    pool: PgPool,
}

impl PgCompletionRepository {
    /// Create a new PgCompletionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompletionRepository for PgCompletionRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: Snowflake, subtopic_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM completions WHERE user_id = $1 AND subtopic_id = $2)",
        )
        .bind(user_id.into_inner())
        .bind(subtopic_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, completion: &Completion) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO completions (user_id, subtopic_id, completed_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(completion.user_id.into_inner())
        .bind(completion.subtopic_id.into_inner())
        .bind(completion.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyCompleted))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, subtopic_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM completions WHERE user_id = $1 AND subtopic_id = $2")
            .bind(user_id.into_inner())
            .bind(subtopic_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_for_user_by_difficulty(
        &self,
        user_id: Snowflake,
    ) -> RepoResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r"
            SELECT s.difficulty, COUNT(*)
            FROM completions c
            JOIN subtopics s ON s.id = c.subtopic_id
            WHERE c.user_id = $1
            GROUP BY s.difficulty
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn delete_by_subtopic(&self, subtopic_id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM completions WHERE subtopic_id = $1")
            .bind(subtopic_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_topic(&self, topic_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM completions
            WHERE subtopic_id IN (SELECT id FROM subtopics WHERE topic_id = $1)
            ",
        )
        .bind(topic_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
