//! User administration service.
//!
//! Handles CRUD operations for user accounts. Passwords are hashed with
//! Argon2id on every write; responses never carry the hash.

use crate::error::ApiUsersError;
use crate::models::{RegisterUserRequest, UpdateUserRequest, UserResponse};
use labstore_db::{CreateUser, UpdateUser, User, UserRole};
use sqlx::PgPool;
use uuid::Uuid;

/// Service for user administration operations.
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users, newest first.
    pub async fn list(&self) -> Result<Vec<UserResponse>, ApiUsersError> {
        let users = User::list(&self.pool).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Register a new user with a hashed password.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<UserResponse, ApiUsersError> {
        let (Some(name), Some(email), Some(password)) =
            (request.name, request.email, request.password)
        else {
            return Err(ApiUsersError::Validation(
                "Missing required fields".to_string(),
            ));
        };

        if User::find_by_email(&self.pool, &email).await?.is_some() {
            return Err(ApiUsersError::AlreadyExists);
        }

        let password_hash = labstore_auth::hash_password(&password)
            .map_err(|e| ApiUsersError::Internal(format!("Failed to hash password: {e}")))?;

        let user = User::create(
            &self.pool,
            CreateUser {
                name,
                email,
                password_hash,
                role: request.role.unwrap_or(UserRole::User),
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, role = ?user.role, "User registered");

        Ok(UserResponse::from(user))
    }

    /// Update a user, re-hashing the password when one is supplied.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, ApiUsersError> {
        if let Some(ref email) = request.email {
            // Reject an email already held by a different account.
            if let Some(existing) = User::find_by_email(&self.pool, email).await? {
                if existing.id != id {
                    return Err(ApiUsersError::AlreadyExists);
                }
            }
        }

        let password_hash = match request.password {
            Some(ref password) => Some(
                labstore_auth::hash_password(password)
                    .map_err(|e| ApiUsersError::Internal(format!("Failed to hash password: {e}")))?,
            ),
            None => None,
        };

        let user = User::update(
            &self.pool,
            id,
            UpdateUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: request.role,
            },
        )
        .await?
        .ok_or(ApiUsersError::NotFound)?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(UserResponse::from(user))
    }

    /// Delete a user.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiUsersError> {
        let deleted = User::delete(&self.pool, id).await?;
        if !deleted {
            return Err(ApiUsersError::NotFound);
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
