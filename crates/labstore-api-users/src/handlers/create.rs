//! Register user endpoint handler.
//!
//! POST /users/register - Create a new user account (admin only).

use crate::error::ApiUsersError;
use crate::models::{RegisterUserRequest, UserResponse};
use crate::services::UserService;
use axum::{http::StatusCode, Extension, Json};
use labstore_auth::JwtClaims;
use std::sync::Arc;

/// Registers a new user account.
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing fields or email already registered"),
        (status = 401, description = "Admin role required"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn register_user_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<UserService>>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiUsersError> {
    tracing::info!(admin_id = %claims.sub, "Registering user");

    let user = service.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
