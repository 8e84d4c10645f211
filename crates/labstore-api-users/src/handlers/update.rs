//! Update user endpoint handler.
//!
//! PUT /users/:id - Update a user account (admin only).

use crate::error::ApiUsersError;
use crate::models::{UpdateUserRequest, UserResponse};
use crate::services::UserService;
use axum::{extract::Path, Extension, Json};
use labstore_auth::JwtClaims;
use std::sync::Arc;
use uuid::Uuid;

/// Updates a user account. Supplied passwords are re-hashed.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Email already registered"),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "User not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_user_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<UserService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    tracing::info!(admin_id = %claims.sub, user_id = %id, "Updating user");

    let user = service.update(id, request).await?;
    Ok(Json(user))
}
