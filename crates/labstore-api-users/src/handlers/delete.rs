//! Delete user endpoint handler.
//!
//! DELETE /users/:id - Delete a user account (admin only).

use crate::error::ApiUsersError;
use crate::models::DeletedResponse;
use crate::services::UserService;
use axum::{extract::Path, Extension, Json};
use labstore_auth::JwtClaims;
use std::sync::Arc;
use uuid::Uuid;

/// Deletes a user account.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "User not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn delete_user_handler(
    Extension(claims): Extension<JwtClaims>,
    Extension(service): Extension<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiUsersError> {
    tracing::info!(admin_id = %claims.sub, user_id = %id, "Deleting user");

    service.delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "User deleted successfully".to_string(),
    }))
}
