//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` with camelCase field names.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated listing `{items, pagination}`
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, page: u32, limit: u32, total: i64) -> Self {
        Self {
            items,
            pagination: PaginationMeta::new(page, limit, total),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub total: i64,
}

impl PaginationMeta {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let page = i64::from(page);
        let limit = i64::from(limit);
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            page,
            limit,
            total_pages,
            total,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// User as exposed on the wire (never carries the password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration / login response: the user plus a fresh session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
}

// ============================================================================
// Topic Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Subtopic Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicResponse {
    pub id: String,
    pub topic_id: String,
    pub name: String,
    pub slug: String,
    pub difficulty: String,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    #[serde(rename = "order")]
    pub position: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Subtopic annotated with the acting user's completion flag
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicWithCompletionResponse {
    #[serde(flatten)]
    pub subtopic: SubtopicResponse,
    pub is_completed: bool,
}

/// A topic together with its (completion-annotated) subtopics
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicWithSubtopicsResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub subtopics: Vec<SubtopicWithCompletionResponse>,
}

// ============================================================================
// Progress Responses
// ============================================================================

/// One difficulty bucket of the progress snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressBucketResponse {
    pub completed: i64,
    pub total: i64,
    /// round(completed / total * 100); 0 when total is 0
    pub percentage: u32,
}

/// Per-user progress snapshot bucketed by difficulty
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressStatsResponse {
    pub easy: ProgressBucketResponse,
    pub medium: ProgressBucketResponse,
    pub tough: ProgressBucketResponse,
    pub overall: ProgressBucketResponse,
}

/// Result of toggling a subtopic completion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCompletionResponse {
    pub subtopic_id: String,
    pub is_completed: bool,
    pub progress: ProgressStatsResponse,
}

/// Point-check of a single subtopic's completion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatusResponse {
    pub is_completed: bool,
}

// ============================================================================
// Problem Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub subtopic: String,
    pub difficulty: String,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    #[serde(rename = "order")]
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Problems of one subtopic label, position-ordered
#[derive(Debug, Serialize)]
pub struct ProblemSubtopicGroupResponse {
    pub name: String,
    pub problems: Vec<ProblemResponse>,
}

/// Problems grouped topic label -> subtopic label
#[derive(Debug, Serialize)]
pub struct ProblemGroupResponse {
    pub topic: String,
    pub subtopics: Vec<ProblemSubtopicGroupResponse>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub total: i64,
    pub active_today: i64,
    pub new_this_week: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgressSummaryResponse {
    pub total: i64,
    pub subtopics: i64,
    pub completion_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummaryResponse {
    pub total_completed: i64,
    /// Rounded to two decimal places
    pub average_per_user: f64,
    pub max_completed: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTopicResponse {
    pub id: String,
    pub name: String,
    pub completed_count: i64,
}

#[derive(Debug, Serialize)]
pub struct DailyActivityResponse {
    /// Calendar day formatted YYYY-MM-DD
    pub date: String,
    pub count: i64,
}

/// Admin dashboard rollup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub users: UserSummaryResponse,
    pub topics: TopicProgressSummaryResponse,
    pub progress: ProgressSummaryResponse,
    pub top_topics: Vec<TopTopicResponse>,
    pub recent_activity: Vec<DailyActivityResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness probe response (database connectivity)
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_rounds_up() {
        let meta = PaginationMeta::new(1, 10, 25);
        assert_eq!(meta.total_pages, 3);

        let meta = PaginationMeta::new(1, 10, 30);
        assert_eq!(meta.total_pages, 3);

        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_page_response_shape() {
        let page = PageResponse::new(vec![1, 2, 3], 2, 3, 7);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["items"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["pagination"]["totalPages"], 3);
        assert_eq!(json["pagination"]["total"], 7);
    }

    #[test]
    fn test_subtopic_position_serializes_as_order() {
        let response = SubtopicResponse {
            id: "1".to_string(),
            topic_id: "2".to_string(),
            name: "Sliding Window".to_string(),
            slug: "sliding-window".to_string(),
            difficulty: "medium".to_string(),
            youtube_link: None,
            leetcode_link: None,
            article_link: None,
            position: 4,
            status: "pending".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["order"], 4);
        assert!(json.get("position").is_none());
        assert_eq!(json["topicId"], "2");
    }
}
