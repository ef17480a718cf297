//! Subtopic catalog handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use track_core::entities::SubtopicStatus;
use track_core::traits::SubtopicFilter;
use track_service::dto::{
    CreateSubtopicRequest, PageResponse, SubtopicResponse, UpdateSubtopicRequest,
    UpdateSubtopicStatusRequest,
};
use track_service::SubtopicService;

use crate::extractors::{AdminUser, AuthUser, IdPath, Pagination, TopicIdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Envelope};
use crate::state::AppState;

/// Query filters for subtopic listings
///
/// `difficulty` and `status` accept comma-separated lists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicFilterParams {
    pub search: Option<String>,
    pub topic_id: Option<String>,
    pub difficulty: Option<String>,
    pub status: Option<String>,
}

impl SubtopicFilterParams {
    fn into_filter(self) -> Result<SubtopicFilter, ApiError> {
        let topic_id = self
            .topic_id
            .map(|s| {
                s.parse()
                    .map_err(|_| ApiError::invalid_query("Invalid topicId format"))
            })
            .transpose()?;

        let difficulties = split_csv(self.difficulty.as_deref());

        let statuses = split_csv(self.status.as_deref())
            .iter()
            .map(|s| {
                SubtopicStatus::parse(s)
                    .ok_or_else(|| ApiError::invalid_query("Invalid status filter"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SubtopicFilter {
            search: self.search,
            topic_id,
            difficulties,
            statuses,
        })
    }
}

fn split_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// List subtopics with filters
///
/// GET /subtopics
pub async fn list_subtopics(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: Pagination,
    Query(params): Query<SubtopicFilterParams>,
) -> ApiResult<Envelope<PageResponse<SubtopicResponse>>> {
    let filter = params.into_filter()?;
    let service = SubtopicService::new(state.service_context());
    let response = service
        .list_subtopics(filter, pagination.page, pagination.limit)
        .await?;
    Ok(Envelope::ok("Subtopics fetched", response))
}

/// List subtopics whose curated status is completed
///
/// GET /subtopics/completed
pub async fn list_completed_subtopics(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Envelope<PageResponse<SubtopicResponse>>> {
    let service = SubtopicService::new(state.service_context());
    let response = service
        .list_completed(pagination.page, pagination.limit)
        .await?;
    Ok(Envelope::ok("Completed subtopics fetched", response))
}

/// List subtopics under one topic
///
/// GET /subtopics/topic/:topic_id
pub async fn list_subtopics_by_topic(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<TopicIdPath>,
    pagination: Pagination,
    Query(params): Query<SubtopicFilterParams>,
) -> ApiResult<Envelope<PageResponse<SubtopicResponse>>> {
    let topic_id = path.topic_id()?;
    let filter = params.into_filter()?;
    let service = SubtopicService::new(state.service_context());
    let response = service
        .list_by_topic(topic_id, filter, pagination.page, pagination.limit)
        .await?;
    Ok(Envelope::ok("Subtopics fetched", response))
}

/// Get a subtopic by ID
///
/// GET /subtopics/:id
pub async fn get_subtopic(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<SubtopicResponse>> {
    let id = path.id()?;
    let service = SubtopicService::new(state.service_context());
    let response = service.get_subtopic(id).await?;
    Ok(Envelope::ok("Subtopic fetched", response))
}

/// Create a subtopic (admin)
///
/// POST /subtopics
pub async fn create_subtopic(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateSubtopicRequest>,
) -> ApiResult<Envelope<SubtopicResponse>> {
    let service = SubtopicService::new(state.service_context());
    let response = service.create_subtopic(request).await?;
    Ok(Envelope::created("Subtopic created successfully", response))
}

/// Update a subtopic (admin)
///
/// PUT /subtopics/:id
pub async fn update_subtopic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateSubtopicRequest>,
) -> ApiResult<Envelope<SubtopicResponse>> {
    let id = path.id()?;
    let service = SubtopicService::new(state.service_context());
    let response = service.update_subtopic(id, request).await?;
    Ok(Envelope::ok("Subtopic updated successfully", response))
}

/// Set the curated status of a subtopic
///
/// PUT /subtopics/:id/status
pub async fn update_subtopic_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<IdPath>,
    axum::Json(request): axum::Json<UpdateSubtopicStatusRequest>,
) -> ApiResult<Envelope<SubtopicResponse>> {
    let id = path.id()?;
    let service = SubtopicService::new(state.service_context());
    let response = service.update_status(id, request).await?;
    Ok(Envelope::ok("Subtopic status updated", response))
}

/// Delete a subtopic (admin)
///
/// DELETE /subtopics/:id
pub async fn delete_subtopic(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<()>> {
    let id = path.id()?;
    let service = SubtopicService::new(state.service_context());
    service.delete_subtopic(id).await?;
    Ok(Envelope::ok("Subtopic deleted successfully", ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv() {
        assert_eq!(split_csv(Some("easy, tough")), vec!["easy", "tough"]);
        assert_eq!(split_csv(Some("")), Vec::<String>::new());
        assert_eq!(split_csv(None), Vec::<String>::new());
    }

    #[test]
    fn test_filter_params_reject_bad_status() {
        let params = SubtopicFilterParams {
            search: None,
            topic_id: None,
            difficulty: None,
            status: Some("done".to_string()),
        };
        assert!(params.into_filter().is_err());
    }
}
