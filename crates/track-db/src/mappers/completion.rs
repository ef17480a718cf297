//! Completion entity <-> model mapper

use track_core::entities::Completion;
use track_core::value_objects::Snowflake;

use crate::models::CompletionModel;

/// Convert CompletionModel to Completion entity
impl From<CompletionModel> for Completion {
    fn from(model: CompletionModel) -> Self {
        Completion {
            user_id: Snowflake::new(model.user_id),
            subtopic_id: Snowflake::new(model.subtopic_id),
            completed_at: model.completed_at,
        }
    }
}
