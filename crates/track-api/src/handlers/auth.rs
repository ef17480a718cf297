//! Authentication and admin handlers
//!
//! Endpoints for registration, login, logout, the current-user profile,
//! and the admin user-management / dashboard surface.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use track_service::dto::{
    AuthResponse, DashboardStatsResponse, LoginRequest, PageResponse, RegisterRequest,
    UpdateUserRequest, UserResponse,
};
use track_service::{AuthService, StatsService, UserService};

use crate::extractors::{AdminUser, AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Envelope};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Envelope<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Envelope::created("User registered successfully", response))
}

/// Login with email, password, and role
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Envelope<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Envelope::ok("Login successful", response))
}

/// Get the current user's profile
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Envelope<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(auth.user.id).await?;
    Ok(Envelope::ok("User profile fetched", response))
}

/// Logout, invalidating the current session token
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Envelope<()>> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.user.id).await?;
    Ok(Envelope::ok("Logged out successfully", ()))
}

/// Search filter for the admin user listing
#[derive(Debug, Deserialize)]
pub struct UserSearchParams {
    pub search: Option<String>,
}

/// List users with optional search (admin)
///
/// GET /auth/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    pagination: Pagination,
    Query(params): Query<UserSearchParams>,
) -> ApiResult<Envelope<PageResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service
        .list_users(params.search, pagination.page, pagination.limit)
        .await?;
    Ok(Envelope::ok("Users fetched", response))
}

/// Update a user's details (admin)
///
/// PUT /auth/admin/update-details/:id
pub async fn update_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(path): Path<IdPath>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Envelope<UserResponse>> {
    let id = path.id()?;
    let service = UserService::new(state.service_context());
    let response = service.update_user(&admin.user, id, request).await?;
    Ok(Envelope::ok("User updated successfully", response))
}

/// Delete a user (admin)
///
/// DELETE /auth/admin/delete-user/:id
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<IdPath>,
) -> ApiResult<Envelope<()>> {
    let id = path.id()?;
    let service = UserService::new(state.service_context());
    service.delete_user(id).await?;
    Ok(Envelope::ok("User deleted successfully", ()))
}

/// Dashboard statistics rollup (admin)
///
/// GET /auth/admin/dashboard-stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Envelope<DashboardStatsResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.dashboard_stats().await?;
    Ok(Envelope::ok("Dashboard statistics fetched", response))
}
