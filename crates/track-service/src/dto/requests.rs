//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Field names follow the camelCase wire convention.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Defaults to "user" when absent
    pub role: Option<String>,
}

/// User login request; the role disambiguates user/admin accounts
/// sharing an email
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub role: Option<String>,
}

/// Admin user update request (allow-listed fields only)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Applied only when the acting user is an admin
    pub role: Option<String>,
}

// ============================================================================
// Topic Requests
// ============================================================================

/// Create topic request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = 100, message = "Topic name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Update topic request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    #[validate(length(min = 1, max = 100, message = "Topic name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    pub is_active: Option<bool>,
}

// ============================================================================
// Subtopic Requests
// ============================================================================

/// Create subtopic request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubtopicRequest {
    #[validate(length(min = 1, max = 100, message = "Subtopic name must be 1-100 characters"))]
    pub name: String,

    /// Parent topic ID (stringified Snowflake)
    pub topic_id: String,

    /// One of easy / medium / tough; defaults to medium
    pub difficulty: Option<String>,

    #[validate(url(message = "Invalid YouTube link"))]
    pub youtube_link: Option<String>,

    #[validate(url(message = "Invalid LeetCode link"))]
    pub leetcode_link: Option<String>,

    #[validate(url(message = "Invalid article link"))]
    pub article_link: Option<String>,

    /// Display position within the topic; wire name `order`
    #[serde(rename = "order")]
    pub position: Option<i32>,

    /// One of pending / completed; defaults to pending
    pub status: Option<String>,
}

/// Update subtopic request (allow-listed fields only)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubtopicRequest {
    #[validate(length(min = 1, max = 100, message = "Subtopic name must be 1-100 characters"))]
    pub name: Option<String>,

    pub difficulty: Option<String>,

    #[validate(url(message = "Invalid YouTube link"))]
    pub youtube_link: Option<String>,

    #[validate(url(message = "Invalid LeetCode link"))]
    pub leetcode_link: Option<String>,

    #[validate(url(message = "Invalid article link"))]
    pub article_link: Option<String>,

    #[serde(rename = "order")]
    pub position: Option<i32>,

    pub status: Option<String>,
}

/// Subtopic status update request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubtopicStatusRequest {
    pub status: String,
}

// ============================================================================
// Progress Requests
// ============================================================================

/// Toggle completion of a subtopic for the acting user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCompletionRequest {
    /// Subtopic ID (stringified Snowflake)
    pub subtopic_id: String,
}

// ============================================================================
// Problem Requests
// ============================================================================

/// Create problem request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    /// Topic label from the fixed taxonomy
    pub topic: String,

    /// Subtopic label belonging to the topic's allowed set
    pub subtopic: String,

    /// One of Easy / Medium / Hard; defaults to Medium
    pub difficulty: Option<String>,

    #[validate(url(message = "Invalid YouTube link"))]
    pub youtube_link: Option<String>,

    #[validate(url(message = "Invalid LeetCode link"))]
    pub leetcode_link: Option<String>,

    #[validate(url(message = "Invalid article link"))]
    pub article_link: Option<String>,

    #[serde(rename = "order")]
    pub position: Option<i32>,
}

/// Update problem request (labels are immutable once set)
#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: Option<String>,

    pub difficulty: Option<String>,

    #[validate(url(message = "Invalid YouTube link"))]
    pub youtube_link: Option<String>,

    #[validate(url(message = "Invalid LeetCode link"))]
    pub leetcode_link: Option<String>,

    #[validate(url(message = "Invalid article link"))]
    pub article_link: Option<String>,

    #[serde(rename = "order")]
    pub position: Option<i32>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            role: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "abc".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_subtopic_order_wire_name() {
        let req: CreateSubtopicRequest = serde_json::from_str(
            r#"{"name":"Two Pointers","topicId":"1234","order":3}"#,
        )
        .unwrap();
        assert_eq!(req.position, Some(3));
        assert_eq!(req.topic_id, "1234");
    }

    #[test]
    fn test_update_topic_accepts_is_active() {
        let req: UpdateTopicRequest =
            serde_json::from_str(r#"{"isActive":false}"#).unwrap();
        assert_eq!(req.is_active, Some(false));
    }
}
