//! Test fixtures and data generators
//!
//! Provides reusable wire-shape types and unique test data for
//! integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique within this run and across reruns on the same
/// database (seeded from the clock)
pub fn unique_suffix() -> u64 {
    static BASE: OnceLock<u64> = OnceLock::new();
    let base = *BASE.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64 % 1_000_000_000)
            .unwrap_or(0)
    });
    base + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Response envelope wrapping every endpoint's payload
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub status: u16,
    pub message: String,
    pub data: T,
}

// ============================================================================
// Auth
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "secret123".to_string(),
            role: None,
        }
    }

    pub fn unique_admin() -> Self {
        Self {
            role: Some("admin".to_string()),
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
            role: reg.role.clone(),
        }
    }
}

/// Auth payload: the user's fields flattened alongside the token
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

/// User payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

// ============================================================================
// Catalog
// ============================================================================

/// Create topic request
#[derive(Debug, Serialize)]
pub struct CreateTopicRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTopicRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Topic {suffix}"),
            description: Some("A test topic".to_string()),
        }
    }
}

/// Topic payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicData {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Create subtopic request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubtopicRequest {
    pub name: String,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(rename = "order", skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl CreateSubtopicRequest {
    pub fn unique(topic_id: &str, difficulty: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Subtopic {suffix}"),
            topic_id: topic_id.to_string(),
            difficulty: Some(difficulty.to_string()),
            position: Some(suffix as i32),
        }
    }
}

/// Subtopic payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicData {
    pub id: String,
    pub topic_id: String,
    pub name: String,
    pub slug: String,
    pub difficulty: String,
    #[serde(rename = "order")]
    pub position: i32,
    pub status: String,
}

/// Paged listing payload
#[derive(Debug, Deserialize)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub pagination: PaginationData,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub total: i64,
}

// ============================================================================
// Progress
// ============================================================================

/// Toggle completion request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub subtopic_id: String,
}

/// Toggle completion payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleData {
    pub subtopic_id: String,
    pub is_completed: bool,
    pub progress: ProgressData,
}

/// Progress snapshot payload
#[derive(Debug, Deserialize)]
pub struct ProgressData {
    pub easy: BucketData,
    pub medium: BucketData,
    pub tough: BucketData,
    pub overall: BucketData,
}

/// One progress bucket
#[derive(Debug, Deserialize)]
pub struct BucketData {
    pub completed: i64,
    pub total: i64,
    pub percentage: u32,
}

/// Topic with annotated subtopics payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicWithSubtopicsData {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub subtopics: Vec<AnnotatedSubtopicData>,
}

/// Subtopic annotated with the viewer's completion
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSubtopicData {
    pub id: String,
    pub name: String,
    pub is_completed: bool,
}

/// Completion status payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatusData {
    pub is_completed: bool,
}

// ============================================================================
// Dashboard
// ============================================================================

/// Dashboard statistics payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub users: DashboardUsersData,
    pub topics: DashboardTopicsData,
    pub progress: DashboardProgressData,
    pub top_topics: Vec<serde_json::Value>,
    pub recent_activity: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUsersData {
    pub total: i64,
    pub active_today: i64,
    pub new_this_week: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTopicsData {
    pub total: i64,
    pub subtopics: i64,
    pub completion_rate: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardProgressData {
    pub total_completed: i64,
    pub average_per_user: f64,
    pub max_completed: i64,
}
