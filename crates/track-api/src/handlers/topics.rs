//! Topic catalog and progress handlers
//!
//! The /topics surface carries both the topic CRUD and the per-user
//! progress operations (the catalog-with-completion view, the toggle,
//! and the progress snapshot).

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use track_service::dto::{
    CompletionStatusResponse, CreateTopicRequest, PageResponse, ProgressStatsResponse,
    ToggleCompletionRequest, ToggleCompletionResponse, TopicResponse,
    TopicWithSubtopicsResponse, UpdateTopicRequest,
};
use track_service::{ProgressService, TopicService};

use crate::extractors::{
    AdminUser, AuthUser, IdPath, OptionalAuthUser, Pagination, SlugPath, SubtopicIdPath,
    ValidatedJson,
};
use crate::response::{ApiResult, Envelope};
use crate::state::AppState;

/// Search filter for topic listings
#[derive(Debug, Deserialize)]
pub struct TopicSearchParams {
    pub search: Option<String>,
}

/// List topics name-ordered with pagination
///
/// GET /topics
pub async fn list_topics(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<TopicSearchParams>,
) -> ApiResult<Envelope<PageResponse<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let response = service
        .list_topics(params.search, pagination.page, pagination.limit)
        .await?;
    Ok(Envelope::ok("Topics fetched", response))
}

/// Search topics by name
///
/// GET /topics/search
pub async fn search_topics(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<TopicSearchParams>,
) -> ApiResult<Envelope<PageResponse<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let response = service
        .list_topics(params.search, pagination.page, pagination.limit)
        .await?;
    Ok(Envelope::ok("Topics fetched", response))
}

/// All active topics with subtopics, annotated with the viewer's completion
///
/// GET /topics/all
pub async fn all_topics_with_subtopics(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
) -> ApiResult<Envelope<Vec<TopicWithSubtopicsResponse>>> {
    let user_id = auth.0.map(|a| a.user.id);
    let service = ProgressService::new(state.service_context());
    let response = service.topics_with_subtopics(user_id).await?;
    Ok(Envelope::ok("Topics with subtopics fetched", response))
}

/// The acting user's per-difficulty progress snapshot
///
/// GET /topics/progress
pub async fn progress_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<ProgressStatsResponse>> {
    let service = ProgressService::new(state.service_context());
    let response = service.progress_stats(auth.user.id).await?;
    Ok(Envelope::ok("Progress fetched", response))
}

/// Toggle the acting user's completion of a subtopic
///
/// POST /topics/toggle-complete
pub async fn toggle_complete(
    State(state): State<AppState>,
    auth: AuthUser,
    axum::Json(request): axum::Json<ToggleCompletionRequest>,
) -> ApiResult<Envelope<ToggleCompletionResponse>> {
    let service = ProgressService::new(state.service_context());
    let response = service
        .toggle_completion(auth.user.id, &request.subtopic_id)
        .await?;
    Ok(Envelope::ok("Completion toggled", response))
}

/// Whether the acting user has completed a subtopic
///
/// GET /topics/completed/:subtopic_id
pub async fn completion_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<SubtopicIdPath>,
) -> ApiResult<Envelope<CompletionStatusResponse>> {
    let service = ProgressService::new(state.service_context());
    let response = service
        .completion_status(auth.user.id, &path.subtopic_id)
        .await?;
    Ok(Envelope::ok("Completion status fetched", response))
}

/// Get a topic by ID
///
/// GET /topics/:id
pub async fn get_topic(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<TopicResponse>> {
    let id = path.id()?;
    let service = TopicService::new(state.service_context());
    let response = service.get_topic(id).await?;
    Ok(Envelope::ok("Topic fetched", response))
}

/// Get a topic by slug
///
/// GET /topics/slug/:slug
pub async fn get_topic_by_slug(
    State(state): State<AppState>,
    Path(path): Path<SlugPath>,
) -> ApiResult<Envelope<TopicResponse>> {
    let service = TopicService::new(state.service_context());
    let response = service.get_topic_by_slug(&path.slug).await?;
    Ok(Envelope::ok("Topic fetched", response))
}

/// Create a topic (admin)
///
/// POST /topics
pub async fn create_topic(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateTopicRequest>,
) -> ApiResult<Envelope<TopicResponse>> {
    let service = TopicService::new(state.service_context());
    let response = service.create_topic(request).await?;
    Ok(Envelope::created("Topic created successfully", response))
}

/// Update a topic (admin)
///
/// PUT /topics/:id
pub async fn update_topic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateTopicRequest>,
) -> ApiResult<Envelope<TopicResponse>> {
    let id = path.id()?;
    let service = TopicService::new(state.service_context());
    let response = service.update_topic(id, request).await?;
    Ok(Envelope::ok("Topic updated successfully", response))
}

/// Delete a topic and everything under it (admin)
///
/// DELETE /topics/:id
pub async fn delete_topic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<()>> {
    let id = path.id()?;
    let service = TopicService::new(state.service_context());
    service.delete_topic(id).await?;
    Ok(Envelope::ok("Topic deleted successfully", ()))
}
