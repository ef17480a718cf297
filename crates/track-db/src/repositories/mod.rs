//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in track-core.
//! Each repository handles database operations for a specific domain entity.

mod completion;
mod error;
mod problem;
mod stats;
mod subtopic;
mod topic;
mod user;

pub use completion::PgCompletionRepository;
pub use problem::PgProblemRepository;
pub use stats::PgStatsRepository;
pub use subtopic::PgSubtopicRepository;
pub use topic::PgTopicRepository;
pub use user::PgUserRepository;
