//! Entity to model mappers
//!
//! Conversions between domain entities (track-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod completion;
mod problem;
mod subtopic;
mod topic;
mod user;

pub use problem::{ProblemInsert, ProblemUpdate};
pub use subtopic::{subtopic_with_completion, SubtopicInsert, SubtopicUpdate};
pub use topic::{TopicInsert, TopicUpdate};
pub use user::UserInsert;
