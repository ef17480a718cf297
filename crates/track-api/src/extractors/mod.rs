//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AdminUser, AuthUser, OptionalAuthUser};
pub use pagination::{Pagination, PaginationParams};
pub use path::{IdPath, SlugPath, SubtopicIdPath, TopicIdPath, TopicLabelPath};
pub use validated::ValidatedJson;
