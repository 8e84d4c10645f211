//! Request and response models for the user administration API.

use chrono::{DateTime, Utc};
use labstore_db::{User, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request to register a user.
///
/// Required fields are modeled as `Option` so that missing values surface as
/// a 400 with a descriptive message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Display name.
    pub name: Option<String>,

    /// Email address, unique across accounts.
    pub email: Option<String>,

    /// Plaintext password; hashed before storage.
    pub password: Option<String>,

    /// Role, defaults to `USER`.
    pub role: Option<UserRole>,
}

/// Request to update a user. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// New plaintext password; hashed before storage.
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

/// A user account without its password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Confirmation body for delete operations.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_role_parses() {
        let request: RegisterUserRequest = serde_json::from_str(
            r#"{"name": "Ada", "email": "ada@example.com", "password": "s3cret", "role": "ADMIN"}"#,
        )
        .unwrap();

        assert_eq!(request.role, Some(UserRole::Admin));
    }

    #[test]
    fn test_user_response_has_no_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }
}
