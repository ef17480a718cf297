//! Authentication service
//!
//! Handles user registration, login, bearer authentication, and logout.
//! A single session token per user is persisted on the user row; a token
//! only authenticates while it matches the stored copy.

use track_common::auth::{hash_password, verify_password};
use track_common::AppError;
use track_core::entities::{User, UserRole};
use track_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and sign their first session token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let role = parse_role(request.role.as_deref())?;

        if self
            .ctx
            .user_repo()
            .email_exists(&request.email, None)
            .await?
        {
            return Err(ServiceError::conflict("Email already in use"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let token = self
            .ctx
            .jwt_service()
            .sign_token(user_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut user = User::new(user_id, request.name, request.email, role);
        user.session_token = Some(token.clone());

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered");

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Login with email, password, and role
    ///
    /// Signs a fresh token and overwrites the stored one, unauthorizing
    /// any earlier session.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let role = parse_role(request.role.as_deref())?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_email_and_role(&request.email, role)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self
            .ctx
            .jwt_service()
            .sign_token(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .set_session_token(user.id, Some(&token))
            .await?;
        user.session_token = Some(token.clone());

        info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// Resolve a bearer token to the acting user
    ///
    /// The token must decode, be unexpired, and match the copy stored on
    /// the user row (single-session policy).
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if !user.token_matches(token) {
            warn!(user_id = %user.id, "Stale session token rejected");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        Ok(user)
    }

    /// Get the acting user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Clear the stored session token, invalidating the current one
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .user_repo()
            .set_session_token(user_id, None)
            .await?;

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}

fn parse_role(role: Option<&str>) -> ServiceResult<UserRole> {
    match role {
        None => Ok(UserRole::User),
        Some(s) => UserRole::parse(s)
            .ok_or_else(|| ServiceError::validation("Role must be 'user' or 'admin'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_defaults_to_user() {
        assert_eq!(parse_role(None).unwrap(), UserRole::User);
        assert_eq!(parse_role(Some("user")).unwrap(), UserRole::User);
        assert_eq!(parse_role(Some("admin")).unwrap(), UserRole::Admin);
        assert!(parse_role(Some("superuser")).is_err());
    }
}
