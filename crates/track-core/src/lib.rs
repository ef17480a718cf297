//! # track-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    problem_taxonomy, subtopics_for_topic, Completion, Difficulty, Problem, ProblemDifficulty,
    Subtopic, SubtopicStatus, Topic, User, UserRole,
};
pub use error::DomainError;
pub use traits::{
    CompletionRepository, DailyCompletions, DashboardCounts, ProblemRepository, RepoResult,
    StatsRepository, SubtopicFilter, SubtopicRepository, TopicCompletions, TopicRepository,
    UserCompletionSpread, UserQuery, UserRepository,
};
pub use value_objects::{slug_candidate, slugify, Snowflake, SnowflakeGenerator, SnowflakeParseError};
