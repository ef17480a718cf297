//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use track_core::error::DomainError;
use track_core::value_objects::Snowflake;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and map it via the violated constraint name
///
/// For tables guarded by more than one unique index, the constraint name
/// is the only way to tell which rule was broken.
pub fn map_named_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "topic not found" error
pub fn topic_not_found(id: Snowflake) -> DomainError {
    DomainError::TopicNotFound(id)
}

/// Create a "subtopic not found" error
pub fn subtopic_not_found(id: Snowflake) -> DomainError {
    DomainError::SubtopicNotFound(id)
}

/// Create a "problem not found" error
pub fn problem_not_found(id: Snowflake) -> DomainError {
    DomainError::ProblemNotFound(id)
}
