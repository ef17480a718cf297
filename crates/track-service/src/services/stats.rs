//! Admin dashboard statistics

use chrono::{Duration, Utc};
use track_core::entities::UserRole;
use tracing::instrument;

use crate::dto::{
    DailyActivityResponse, DashboardStatsResponse, ProgressSummaryResponse,
    TopTopicResponse, TopicProgressSummaryResponse, UserSummaryResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const TOP_TOPICS_LIMIT: i64 = 5;

/// Admin dashboard statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble the full dashboard rollup
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> ServiceResult<DashboardStatsResponse> {
        let stats = self.ctx.stats_repo();
        let week_ago = Utc::now() - Duration::days(7);

        let total_users = stats.count_users(UserRole::User).await?;
        let new_this_week = stats.count_users_since(UserRole::User, week_ago).await?;

        let total_topics = stats.count_active_topics().await?;
        let total_subtopics = self.ctx.subtopic_repo().count_all().await?;
        let total_completed = stats.count_completions().await?;

        let completion_rate = if total_subtopics > 0 {
            round2(total_completed as f64 / total_subtopics as f64 * 100.0)
        } else {
            0.0
        };

        let spread = stats.completion_spread().await?;

        let top_topics = stats
            .top_topics(TOP_TOPICS_LIMIT)
            .await?
            .into_iter()
            .map(|t| TopTopicResponse {
                id: t.topic_id.to_string(),
                name: t.name,
                completed_count: t.completed,
            })
            .collect();

        let recent_activity = stats
            .daily_completions(week_ago)
            .await?
            .into_iter()
            .map(|d| DailyActivityResponse {
                date: d.day.format("%Y-%m-%d").to_string(),
                count: d.count,
            })
            .collect();

        Ok(DashboardStatsResponse {
            users: UserSummaryResponse {
                total: total_users,
                // Last-seen tracking does not exist yet; the dashboard
                // renders this slot regardless.
                active_today: 0,
                new_this_week,
            },
            topics: TopicProgressSummaryResponse {
                total: total_topics,
                subtopics: total_subtopics,
                completion_rate,
            },
            progress: ProgressSummaryResponse {
                total_completed,
                average_per_user: round2(spread.average),
                max_completed: spread.max,
            },
            top_topics,
            recent_activity,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
