//! Database models - SQLx-compatible structs for PostgreSQL tables

mod completion;
mod problem;
mod subtopic;
mod topic;
mod user;

pub use completion::CompletionModel;
pub use problem::ProblemModel;
pub use subtopic::{SubtopicModel, SubtopicWithCompletionModel};
pub use topic::TopicModel;
pub use user::UserModel;
