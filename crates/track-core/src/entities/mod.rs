//! Domain entities

mod completion;
mod problem;
mod subtopic;
mod topic;
mod user;

pub use completion::Completion;
pub use problem::{problem_taxonomy, subtopics_for_topic, Problem, ProblemDifficulty};
pub use subtopic::{Difficulty, Subtopic, SubtopicStatus};
pub use topic::Topic;
pub use user::{User, UserRole};
