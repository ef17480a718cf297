//! User administration service

use track_core::entities::{User, UserRole};
use track_core::traits::UserQuery;
use track_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{PageResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User administration service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List users with optional name/email search, newest first
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        search: Option<String>,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PageResponse<UserResponse>> {
        let total = self.ctx.user_repo().count(search.as_deref()).await?;

        let query = UserQuery {
            search,
            offset: (page.saturating_sub(1) as i64) * limit as i64,
            limit: limit as i64,
        };
        let users = self.ctx.user_repo().list(&query).await?;

        let items = users.iter().map(UserResponse::from).collect();
        Ok(PageResponse::new(items, page, limit, total))
    }

    /// Update a user's details
    ///
    /// Name and email apply for any caller; role changes apply only when
    /// the acting user is an admin.
    #[instrument(skip(self, request), fields(user_id = %id))]
    pub async fn update_user(
        &self,
        actor: &User,
        id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        if let Some(name) = request.name {
            user.name = name;
        }

        if let Some(email) = request.email {
            let email = email.to_lowercase();
            if email != user.email
                && self.ctx.user_repo().email_exists(&email, Some(id)).await?
            {
                return Err(ServiceError::conflict("Email already in use"));
            }
            user.email = email;
        }

        if let Some(role) = request.role {
            if actor.is_admin() {
                user.role = UserRole::parse(&role)
                    .ok_or_else(|| ServiceError::validation("Role must be 'user' or 'admin'"))?;
            }
        }

        self.ctx.user_repo().update_profile(&user).await?;

        info!(user_id = %id, "User updated");
        Ok(UserResponse::from(&user))
    }

    /// Delete a user; their completions go with them
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.user_repo().delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
