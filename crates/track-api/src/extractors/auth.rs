//! Authentication extractors
//!
//! Resolve the `Authorization: Bearer` header to the acting user. The
//! token is checked against the copy stored on the user row, so a stale
//! token from before a logout or second login is rejected here, before
//! any handler logic runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use track_core::entities::User;
use track_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The acting user's full record
    pub user: User,
}

async fn resolve_user<S>(state: &S, token: &str) -> Result<User, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let app_state = AppState::from_ref(state);
    let service = AuthService::new(app_state.service_context());

    service.authenticate(token).await.map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        e.into()
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let user = resolve_user(state, bearer.token()).await?;
        Ok(AuthUser { user })
    }
}

/// Optional authenticated user
///
/// Returns None when no authorization header is present; a header that
/// is present but invalid is still an error.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let user = resolve_user(state, bearer.token()).await?;
                Ok(OptionalAuthUser(Some(AuthUser { user })))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}

/// Authenticated admin user
///
/// Authenticates like [`AuthUser`] and additionally requires the admin
/// role, answering 403 otherwise.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            tracing::warn!(user_id = %user.id, "Non-admin attempted an admin route");
            return Err(ApiError::App(
                track_common::AppError::InsufficientPermissions,
            ));
        }

        Ok(AdminUser { user })
    }
}
