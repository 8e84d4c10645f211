//! User model and role enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Authorization role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Standard storefront user.
    User,
    /// Back-office administrator.
    Admin,
}

impl UserRole {
    /// The role name as stored in JWT claims.
    #[must_use]
    pub fn as_claim(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// A user account.
///
/// The password hash is never serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Email address, unique across all accounts.
    pub email: String,

    /// Argon2id password hash (PHC string).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Authorization role.
    pub role: UserRole,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Input for updating a user. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
}

impl User {
    /// Find a user by ID.
    pub async fn find_by_id(pool: &sqlx::PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find a user by email address.
    pub async fn find_by_email(
        pool: &sqlx::PgPool,
        email: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// List all users, newest first.
    pub async fn list(pool: &sqlx::PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as(
            r"
            SELECT * FROM users
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(pool)
        .await
    }

    /// Create a new user.
    pub async fn create(pool: &sqlx::PgPool, input: CreateUser) -> Result<Self, sqlx::Error> {
        sqlx::query_as(
            r"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.role)
        .fetch_one(pool)
        .await
    }

    /// Update a user. Only the supplied fields change.
    pub async fn update(
        pool: &sqlx::PgPool,
        id: Uuid,
        input: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut updates = vec!["updated_at = NOW()".to_string()];
        let mut param_idx = 2;

        if input.name.is_some() {
            updates.push(format!("name = ${param_idx}"));
            param_idx += 1;
        }
        if input.email.is_some() {
            updates.push(format!("email = ${param_idx}"));
            param_idx += 1;
        }
        if input.password_hash.is_some() {
            updates.push(format!("password_hash = ${param_idx}"));
            param_idx += 1;
        }
        if input.role.is_some() {
            updates.push(format!("role = ${param_idx}"));
        }

        let query = format!(
            "UPDATE users SET {} WHERE id = $1 RETURNING *",
            updates.join(", ")
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(id);

        if let Some(ref name) = input.name {
            q = q.bind(name);
        }
        if let Some(ref email) = input.email {
            q = q.bind(email);
        }
        if let Some(ref password_hash) = input.password_hash {
            q = q.bind(password_hash);
        }
        if let Some(role) = input.role {
            q = q.bind(role);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a user. Returns whether a row was removed.
    pub async fn delete(pool: &sqlx::PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether this account is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
