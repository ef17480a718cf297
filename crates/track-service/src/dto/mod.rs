//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase on the wire)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::subtopic_with_completion;

// Re-export commonly used request types
pub use requests::{
    CreateProblemRequest, CreateSubtopicRequest, CreateTopicRequest, LoginRequest,
    RegisterRequest, ToggleCompletionRequest, UpdateProblemRequest, UpdateSubtopicRequest,
    UpdateSubtopicStatusRequest, UpdateTopicRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CompletionStatusResponse, DailyActivityResponse, DashboardStatsResponse,
    HealthResponse, PageResponse, PaginationMeta, ProblemGroupResponse, ProblemResponse,
    ProblemSubtopicGroupResponse, ProgressBucketResponse, ProgressStatsResponse,
    ProgressSummaryResponse, ReadinessResponse, SubtopicResponse, SubtopicWithCompletionResponse,
    ToggleCompletionResponse, TopTopicResponse, TopicProgressSummaryResponse, TopicResponse,
    TopicWithSubtopicsResponse, UserResponse, UserSummaryResponse,
};
