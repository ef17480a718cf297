//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, health, problems, subtopics, topics};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(topic_routes())
        .merge(subtopic_routes())
        .merge(problem_routes())
}

/// Authentication and admin routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/admin/users", get(auth::list_users))
        .route("/auth/admin/update-details/:id", put(auth::update_user))
        .route("/auth/admin/delete-user/:id", delete(auth::delete_user))
        .route("/auth/admin/dashboard-stats", get(auth::dashboard_stats))
}

/// Topic catalog and progress routes
///
/// Static segments are registered before the /:id catch-all.
fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(topics::list_topics))
        .route("/topics", post(topics::create_topic))
        .route("/topics/search", get(topics::search_topics))
        .route("/topics/all", get(topics::all_topics_with_subtopics))
        .route("/topics/progress", get(topics::progress_stats))
        .route("/topics/toggle-complete", post(topics::toggle_complete))
        .route("/topics/completed/:subtopic_id", get(topics::completion_status))
        .route("/topics/slug/:slug", get(topics::get_topic_by_slug))
        .route("/topics/:id", get(topics::get_topic))
        .route("/topics/:id", put(topics::update_topic))
        .route("/topics/:id", delete(topics::delete_topic))
}

/// Subtopic catalog routes
fn subtopic_routes() -> Router<AppState> {
    Router::new()
        .route("/subtopics", get(subtopics::list_subtopics))
        .route("/subtopics", post(subtopics::create_subtopic))
        .route("/subtopics/completed", get(subtopics::list_completed_subtopics))
        .route("/subtopics/topic/:topic_id", get(subtopics::list_subtopics_by_topic))
        .route("/subtopics/:id", get(subtopics::get_subtopic))
        .route("/subtopics/:id", put(subtopics::update_subtopic))
        .route("/subtopics/:id", delete(subtopics::delete_subtopic))
        .route("/subtopics/:id/status", put(subtopics::update_subtopic_status))
}

/// Legacy problem catalog routes
fn problem_routes() -> Router<AppState> {
    Router::new()
        .route("/problems", get(problems::list_problems))
        .route("/problems", post(problems::create_problem))
        .route("/problems/topic/:topic", get(problems::list_problems_by_topic))
        .route("/problems/:id", get(problems::get_problem))
        .route("/problems/:id", put(problems::update_problem))
        .route("/problems/:id", delete(problems::delete_problem))
}
