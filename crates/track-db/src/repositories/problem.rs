//! PostgreSQL implementation of ProblemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::Problem;
use track_core::error::DomainError;
use track_core::traits::{ProblemRepository, RepoResult};
use track_core::value_objects::Snowflake;

use crate::mappers::{ProblemInsert, ProblemUpdate};
use crate::models::ProblemModel;

use super::error::{map_db_error, map_unique_violation, problem_not_found};

const PROBLEM_COLUMNS: &str = "id, title, description, topic, subtopic, difficulty, \
     youtube_link, leetcode_link, article_link, position, is_active, created_at";

/// PostgreSQL implementation of ProblemRepository
#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    /// Create a new PgProblemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemRepository for PgProblemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Problem>> {
        let result = sqlx::query_as::<_, ProblemModel>(&format!(
            "SELECT {PROBLEM_COLUMNS} FROM problems WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Problem::from))
    }

    #[instrument(skip(self))]
    async fn find_active_ordered(&self) -> RepoResult<Vec<Problem>> {
        let rows = sqlx::query_as::<_, ProblemModel>(&format!(
            r"
            SELECT {PROBLEM_COLUMNS} FROM problems
            WHERE is_active
            ORDER BY topic, subtopic, position, id
            "
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Problem::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_topic(&self, topic: &str) -> RepoResult<Vec<Problem>> {
        let rows = sqlx::query_as::<_, ProblemModel>(&format!(
            r"
            SELECT {PROBLEM_COLUMNS} FROM problems
            WHERE is_active AND topic = $1
            ORDER BY subtopic, position, id
            "
        ))
        .bind(topic)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Problem::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, problem: &Problem) -> RepoResult<()> {
        let insert = ProblemInsert::new(problem);

        sqlx::query(
            r"
            INSERT INTO problems (id, title, description, topic, subtopic, difficulty,
                                  youtube_link, leetcode_link, article_link, position,
                                  is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(insert.id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.topic)
        .bind(insert.subtopic)
        .bind(insert.difficulty)
        .bind(insert.youtube_link)
        .bind(insert.leetcode_link)
        .bind(insert.article_link)
        .bind(insert.position)
        .bind(insert.is_active)
        .bind(problem.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProblemOrderExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, problem: &Problem) -> RepoResult<()> {
        let update = ProblemUpdate::new(problem);

        let result = sqlx::query(
            r"
            UPDATE problems
            SET title = $2, description = $3, difficulty = $4, youtube_link = $5,
                leetcode_link = $6, article_link = $7, position = $8, is_active = $9
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.difficulty)
        .bind(update.youtube_link)
        .bind(update.leetcode_link)
        .bind(update.article_link)
        .bind(update.position)
        .bind(update.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProblemOrderExists))?;

        if result.rows_affected() == 0 {
            return Err(problem_not_found(problem.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM problems WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(problem_not_found(id));
        }

        Ok(())
    }
}
