//! PostgreSQL implementation of StatsRepository
//!
//! Read-only dashboard rollups. Every query runs against live tables on
//! each request; nothing here is cached.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::instrument;

use track_core::entities::UserRole;
use track_core::traits::{
    DailyCompletions, RepoResult, StatsRepository, TopicCompletions, UserCompletionSpread,
};
use track_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn count_users(&self, role: UserRole) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_users_since(&self, role: UserRole, since: DateTime<Utc>) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE role = $1 AND created_at >= $2",
        )
        .bind(role.as_str())
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_active_topics(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM topics WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_completions(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM completions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn completion_spread(&self) -> RepoResult<UserCompletionSpread> {
        let row = sqlx::query_as::<_, (Option<f64>, Option<i64>)>(
            r"
            SELECT AVG(n)::float8, MAX(n)
            FROM (SELECT COUNT(*) AS n FROM completions GROUP BY user_id) per_user
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UserCompletionSpread {
            average: row.0.unwrap_or(0.0),
            max: row.1.unwrap_or(0),
        })
    }

    #[instrument(skip(self))]
    async fn top_topics(&self, limit: i64) -> RepoResult<Vec<TopicCompletions>> {
        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            r"
            SELECT t.id, t.name, COUNT(c.user_id) AS completed
            FROM completions c
            JOIN subtopics s ON s.id = c.subtopic_id
            JOIN topics t ON t.id = s.topic_id
            GROUP BY t.id, t.name
            ORDER BY completed DESC, t.name
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, name, completed)| TopicCompletions {
                topic_id: Snowflake::new(id),
                name,
                completed,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn daily_completions(&self, since: DateTime<Utc>) -> RepoResult<Vec<DailyCompletions>> {
        let rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r"
            SELECT completed_at::date AS day, COUNT(*)
            FROM completions
            WHERE completed_at >= $1
            GROUP BY day
            ORDER BY day
            ",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(day, count)| DailyCompletions { day, count })
            .collect())
    }
}
