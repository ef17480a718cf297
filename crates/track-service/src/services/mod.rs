//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod problem;
pub mod progress;
pub mod stats;
pub mod subtopic;
pub mod topic;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use problem::ProblemService;
pub use progress::ProgressService;
pub use stats::StatsService;
pub use subtopic::SubtopicService;
pub use topic::TopicService;
pub use user::UserService;
