//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Topic not found: {0}")]
    TopicNotFound(Snowflake),

    #[error("Subtopic not found: {0}")]
    SubtopicNotFound(Snowflake),

    #[error("Problem not found: {0}")]
    ProblemNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown taxonomy label: {topic}/{subtopic}")]
    UnknownTaxonomyLabel { topic: String, subtopic: String },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Topic with this name already exists")]
    TopicNameExists,

    #[error("Subtopic with this name already exists for the selected topic")]
    SubtopicNameExists,

    #[error("Subtopic order already taken within this topic")]
    SubtopicOrderExists,

    #[error("Problem order already taken within this topic/subtopic")]
    ProblemOrderExists,

    #[error("Subtopic already marked complete")]
    AlreadyCompleted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TopicNotFound(_) => "UNKNOWN_TOPIC",
            Self::SubtopicNotFound(_) => "UNKNOWN_SUBTOPIC",
            Self::ProblemNotFound(_) => "UNKNOWN_PROBLEM",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::UnknownDifficulty(_) => "UNKNOWN_DIFFICULTY",
            Self::UnknownTaxonomyLabel { .. } => "UNKNOWN_TAXONOMY_LABEL",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::TopicNameExists => "TOPIC_NAME_EXISTS",
            Self::SubtopicNameExists => "SUBTOPIC_NAME_EXISTS",
            Self::SubtopicOrderExists => "SUBTOPIC_ORDER_EXISTS",
            Self::ProblemOrderExists => "PROBLEM_ORDER_EXISTS",
            Self::AlreadyCompleted => "ALREADY_COMPLETED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::TopicNotFound(_)
                | Self::SubtopicNotFound(_)
                | Self::ProblemNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::UnknownDifficulty(_)
                | Self::UnknownTaxonomyLabel { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::TopicNameExists
                | Self::SubtopicNameExists
                | Self::SubtopicOrderExists
                | Self::ProblemOrderExists
                | Self::AlreadyCompleted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifiers() {
        assert!(DomainError::TopicNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::EmailAlreadyExists.is_conflict());
        assert!(DomainError::SubtopicOrderExists.is_conflict());
        assert!(DomainError::InvalidEmail.is_validation());
        assert!(!DomainError::DatabaseError("x".to_string()).is_conflict());
    }

    #[test]
    fn test_codes() {
        assert_eq!(DomainError::AlreadyCompleted.code(), "ALREADY_COMPLETED");
        assert_eq!(
            DomainError::SubtopicNotFound(Snowflake::new(9)).code(),
            "UNKNOWN_SUBTOPIC"
        );
    }
}
