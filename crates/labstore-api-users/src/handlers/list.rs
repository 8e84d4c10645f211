//! List users endpoint handler.
//!
//! GET /users - List all user accounts (admin only).

use crate::error::ApiUsersError;
use crate::models::UserResponse;
use crate::services::UserService;
use axum::{Extension, Json};
use std::sync::Arc;

/// Lists all user accounts, newest first.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Admin role required"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn list_users_handler(
    Extension(service): Extension<Arc<UserService>>,
) -> Result<Json<Vec<UserResponse>>, ApiUsersError> {
    let users = service.list().await?;
    Ok(Json(users))
}
