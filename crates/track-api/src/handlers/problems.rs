//! Legacy problem catalog handlers

use axum::extract::{Path, State};
use track_service::dto::{
    CreateProblemRequest, ProblemGroupResponse, ProblemResponse, UpdateProblemRequest,
};
use track_service::ProblemService;

use crate::extractors::{AdminUser, IdPath, TopicLabelPath, ValidatedJson};
use crate::response::{ApiResult, Envelope};
use crate::state::AppState;

/// All active problems grouped topic -> subtopic
///
/// GET /problems
pub async fn list_problems(
    State(state): State<AppState>,
) -> ApiResult<Envelope<Vec<ProblemGroupResponse>>> {
    let service = ProblemService::new(state.service_context());
    let response = service.grouped_problems().await?;
    Ok(Envelope::ok("Problems fetched", response))
}

/// Active problems for one topic label
///
/// GET /problems/topic/:topic
pub async fn list_problems_by_topic(
    State(state): State<AppState>,
    Path(path): Path<TopicLabelPath>,
) -> ApiResult<Envelope<ProblemGroupResponse>> {
    let service = ProblemService::new(state.service_context());
    let response = service.problems_by_topic(&path.topic).await?;
    Ok(Envelope::ok("Problems fetched", response))
}

/// Get a problem by ID
///
/// GET /problems/:id
pub async fn get_problem(
    State(state): State<AppState>,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<ProblemResponse>> {
    let id = path.id()?;
    let service = ProblemService::new(state.service_context());
    let response = service.get_problem(id).await?;
    Ok(Envelope::ok("Problem fetched", response))
}

/// Create a problem (admin)
///
/// POST /problems
pub async fn create_problem(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateProblemRequest>,
) -> ApiResult<Envelope<ProblemResponse>> {
    let service = ProblemService::new(state.service_context());
    let response = service.create_problem(request).await?;
    Ok(Envelope::created("Problem created successfully", response))
}

/// Update a problem (admin)
///
/// PUT /problems/:id
pub async fn update_problem(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateProblemRequest>,
) -> ApiResult<Envelope<ProblemResponse>> {
    let id = path.id()?;
    let service = ProblemService::new(state.service_context());
    let response = service.update_problem(id, request).await?;
    Ok(Envelope::ok("Problem updated successfully", response))
}

/// Delete a problem (admin)
///
/// DELETE /problems/:id
pub async fn delete_problem(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<()>> {
    let id = path.id()?;
    let service = ProblemService::new(state.service_context());
    service.delete_problem(id).await?;
    Ok(Envelope::ok("Problem deleted successfully", ()))
}
