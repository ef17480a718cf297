//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Completion, Problem, Subtopic, SubtopicStatus, Topic, User, UserRole};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Paged user listing parameters
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Case-insensitive substring match over name/email
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive) and role
    async fn find_by_email_and_role(&self, email: &str, role: UserRole) -> RepoResult<Option<User>>;

    /// Check if email is already taken, optionally excluding one user
    async fn email_exists(&self, email: &str, exclude: Option<Snowflake>) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update name / email / role
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Overwrite or clear the stored session token
    async fn set_session_token(&self, id: Snowflake, token: Option<&str>) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Count users matching the search filter
    async fn count(&self, search: Option<&str>) -> RepoResult<i64>;

    /// List users newest-first with pagination
    async fn list(&self, query: &UserQuery) -> RepoResult<Vec<User>>;

    /// Delete a user (their completions cascade at the database)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Topic Repository
// ============================================================================

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Find topic by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Topic>>;

    /// Find topic by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Topic>>;

    /// All active topics ordered by name
    async fn find_active(&self) -> RepoResult<Vec<Topic>>;

    /// Check name uniqueness, optionally excluding one topic
    async fn name_exists(&self, name: &str, exclude: Option<Snowflake>) -> RepoResult<bool>;

    /// Check slug uniqueness, optionally excluding one topic
    async fn slug_exists(&self, slug: &str, exclude: Option<Snowflake>) -> RepoResult<bool>;

    /// Create a new topic
    async fn create(&self, topic: &Topic) -> RepoResult<()>;

    /// Update an existing topic
    async fn update(&self, topic: &Topic) -> RepoResult<()>;

    /// Delete a topic (dependents must be removed first)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Count topics matching the search filter
    async fn count(&self, search: Option<&str>) -> RepoResult<i64>;

    /// List topics name-ordered with pagination
    async fn list(&self, search: Option<&str>, offset: i64, limit: i64) -> RepoResult<Vec<Topic>>;
}

// ============================================================================
// Subtopic Repository
// ============================================================================

/// Filters for subtopic listings
#[derive(Debug, Clone, Default)]
pub struct SubtopicFilter {
    /// Case-insensitive substring match over name
    pub search: Option<String>,
    pub topic_id: Option<Snowflake>,
    /// Raw difficulty labels (comma-separated on the wire)
    pub difficulties: Vec<String>,
    pub statuses: Vec<SubtopicStatus>,
}

#[async_trait]
pub trait SubtopicRepository: Send + Sync {
    /// Find subtopic by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Subtopic>>;

    /// Check name uniqueness within a topic, optionally excluding one subtopic
    async fn name_exists(
        &self,
        topic_id: Snowflake,
        name: &str,
        exclude: Option<Snowflake>,
    ) -> RepoResult<bool>;

    /// Check slug uniqueness across subtopics, optionally excluding one
    async fn slug_exists(&self, slug: &str, exclude: Option<Snowflake>) -> RepoResult<bool>;

    /// Check position uniqueness within a topic, optionally excluding one subtopic
    async fn position_exists(
        &self,
        topic_id: Snowflake,
        position: i32,
        exclude: Option<Snowflake>,
    ) -> RepoResult<bool>;

    /// Next free position at the end of a topic's listing
    async fn next_position(&self, topic_id: Snowflake) -> RepoResult<i32>;

    /// Create a new subtopic
    async fn create(&self, subtopic: &Subtopic) -> RepoResult<()>;

    /// Update an existing subtopic
    async fn update(&self, subtopic: &Subtopic) -> RepoResult<()>;

    /// Delete a subtopic (completions must be removed first)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Delete all subtopics under a topic
    async fn delete_by_topic(&self, topic_id: Snowflake) -> RepoResult<()>;

    /// Count subtopics matching the filters
    async fn count(&self, filter: &SubtopicFilter) -> RepoResult<i64>;

    /// List subtopics position-ordered with pagination
    async fn list(&self, filter: &SubtopicFilter, offset: i64, limit: i64) -> RepoResult<Vec<Subtopic>>;

    /// All subtopics of active topics, each annotated with whether the
    /// given user has completed it. An absent user annotates everything
    /// false (the left join matches nothing).
    async fn find_with_completion(
        &self,
        user_id: Option<Snowflake>,
    ) -> RepoResult<Vec<(Subtopic, bool)>>;

    /// Subtopic totals grouped by raw difficulty label
    async fn count_grouped_by_difficulty(&self) -> RepoResult<Vec<(String, i64)>>;

    /// Total number of subtopics
    async fn count_all(&self) -> RepoResult<i64>;
}

// ============================================================================
// Completion Repository
// ============================================================================

#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Check whether a completion record exists for the pair
    async fn exists(&self, user_id: Snowflake, subtopic_id: Snowflake) -> RepoResult<bool>;

    /// Insert a completion record.
    ///
    /// A uniqueness-constraint violation maps to
    /// `DomainError::AlreadyCompleted` so concurrent toggles can be
    /// reconciled instead of surfaced as hard errors.
    async fn create(&self, completion: &Completion) -> RepoResult<()>;

    /// Delete the completion record for the pair; returns whether one existed
    async fn delete(&self, user_id: Snowflake, subtopic_id: Snowflake) -> RepoResult<bool>;

    /// Per-user completed counts grouped by raw difficulty label
    async fn count_for_user_by_difficulty(&self, user_id: Snowflake)
        -> RepoResult<Vec<(String, i64)>>;

    /// Remove completion records for one subtopic
    async fn delete_by_subtopic(&self, subtopic_id: Snowflake) -> RepoResult<()>;

    /// Remove completion records for every subtopic under a topic
    async fn delete_by_topic(&self, topic_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Problem Repository (legacy catalog)
// ============================================================================

#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Find problem by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Problem>>;

    /// All active problems ordered by (topic, subtopic, position)
    async fn find_active_ordered(&self) -> RepoResult<Vec<Problem>>;

    /// Active problems for one topic label, position-ordered
    async fn find_by_topic(&self, topic: &str) -> RepoResult<Vec<Problem>>;

    /// Create a new problem
    async fn create(&self, problem: &Problem) -> RepoResult<()>;

    /// Update an existing problem
    async fn update(&self, problem: &Problem) -> RepoResult<()>;

    /// Delete a problem
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Statistics Repository (read-only dashboard rollups)
// ============================================================================

/// Headline counters for the dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardCounts {
    pub total_users: i64,
    pub new_users_this_week: i64,
    pub total_topics: i64,
    pub total_subtopics: i64,
    pub total_completions: i64,
}

/// Average / maximum completions per user
#[derive(Debug, Clone, Copy, Default)]
pub struct UserCompletionSpread {
    pub average: f64,
    pub max: i64,
}

/// Completion count for one topic
#[derive(Debug, Clone)]
pub struct TopicCompletions {
    pub topic_id: Snowflake,
    pub name: String,
    pub completed: i64,
}

/// Completion count for one calendar day
#[derive(Debug, Clone)]
pub struct DailyCompletions {
    pub day: NaiveDate,
    pub count: i64,
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Count users with the given role
    async fn count_users(&self, role: UserRole) -> RepoResult<i64>;

    /// Count users with the given role created since the timestamp
    async fn count_users_since(&self, role: UserRole, since: DateTime<Utc>) -> RepoResult<i64>;

    /// Count active topics
    async fn count_active_topics(&self) -> RepoResult<i64>;

    /// Count all completion records
    async fn count_completions(&self) -> RepoResult<i64>;

    /// Average and max completions per user (zeroes when no completions)
    async fn completion_spread(&self) -> RepoResult<UserCompletionSpread>;

    /// Top topics by completion count, descending
    async fn top_topics(&self, limit: i64) -> RepoResult<Vec<TopicCompletions>>;

    /// Daily completion counts since the timestamp, day-ascending
    async fn daily_completions(&self, since: DateTime<Utc>) -> RepoResult<Vec<DailyCompletions>>;
}
