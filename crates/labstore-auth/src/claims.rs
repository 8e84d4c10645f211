//! JWT claims structure with standard and custom claims.
//!
//! Provides the `JwtClaims` struct containing RFC 7519 standard claims plus
//! the labstore-specific `roles` and `email` claims.

use chrono::Utc;
use labstore_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role name carried by administrator tokens.
pub const ADMIN_ROLE: &str = "admin";

/// JWT claims containing standard and custom claims.
///
/// # Standard Claims (RFC 7519)
///
/// - `sub`: Subject (the user ID)
/// - `iss`: Issuer (who created the token)
/// - `aud`: Audience (intended recipients)
/// - `exp`: Expiration time (Unix timestamp)
/// - `iat`: Issued at (Unix timestamp)
/// - `jti`: JWT ID (unique identifier)
///
/// # Custom Claims
///
/// - `roles`: User roles for authorization (`user`, `admin`)
/// - `email`: User email address
///
/// # Example
///
/// ```rust
/// use labstore_auth::JwtClaims;
///
/// let claims = JwtClaims::builder()
///     .subject("b04965e6-a9bb-4a9a-95b0-4e9e5d8f36b5")
///     .issuer("labstore")
///     .roles(vec!["admin"])
///     .expires_in_secs(3600)
///     .build();
///
/// assert!(claims.has_role("admin"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JwtClaims {
    /// Subject - the user ID.
    pub sub: String,

    /// Issuer - who created the token.
    pub iss: String,

    /// Audience - intended recipients.
    #[serde(default)]
    pub aud: Vec<String>,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// JWT ID - unique identifier for this token.
    pub jti: String,

    /// User roles for authorization.
    #[serde(default)]
    pub roles: Vec<String>,

    /// User email address (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl JwtClaims {
    /// Create a new builder for constructing JWT claims.
    #[must_use]
    pub fn builder() -> JwtClaimsBuilder {
        JwtClaimsBuilder::default()
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Parse the subject claim into a typed user ID.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }

    /// Check if the claims contain a specific role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if the claims carry the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

/// Builder for constructing JWT claims.
#[derive(Debug, Default)]
pub struct JwtClaimsBuilder {
    sub: Option<String>,
    iss: Option<String>,
    aud: Vec<String>,
    exp: Option<i64>,
    iat: Option<i64>,
    jti: Option<String>,
    roles: Vec<String>,
    email: Option<String>,
}

impl JwtClaimsBuilder {
    /// Set the subject (user ID).
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the audience.
    #[must_use]
    pub fn audience(mut self, aud: Vec<impl Into<String>>) -> Self {
        self.aud = aud.into_iter().map(Into::into).collect();
        self
    }

    /// Set expiration time as Unix timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set expiration time as seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.exp = Some(Utc::now().timestamp() + secs);
        self
    }

    /// Set the issued at time.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the JWT ID.
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Set the roles.
    #[must_use]
    pub fn roles(mut self, roles: Vec<impl Into<String>>) -> Self {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single role.
    #[must_use]
    pub fn add_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Set the user's email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Build the JWT claims.
    ///
    /// # Defaults
    ///
    /// - `sub`: Empty string if not set
    /// - `iss`: "labstore" if not set
    /// - `aud`: Empty vec if not set
    /// - `exp`: 1 hour from now if not set
    /// - `iat`: Current time if not set
    /// - `jti`: New UUID v4 if not set
    #[must_use]
    pub fn build(self) -> JwtClaims {
        let now = Utc::now().timestamp();

        JwtClaims {
            sub: self.sub.unwrap_or_default(),
            iss: self.iss.unwrap_or_else(|| "labstore".to_string()),
            aud: self.aud,
            exp: self.exp.unwrap_or(now + 3600), // Default: 1 hour
            iat: self.iat.unwrap_or(now),
            jti: self.jti.unwrap_or_else(|| Uuid::new_v4().to_string()),
            roles: self.roles,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_builder_basic() {
        let claims = JwtClaims::builder()
            .subject("user-123")
            .issuer("test-issuer")
            .build();

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.iss, "test-issuer");
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_claims_builder_with_roles() {
        let claims = JwtClaims::builder()
            .subject("user-123")
            .roles(vec!["admin", "user"])
            .build();

        assert!(claims.has_role("admin"));
        assert!(claims.has_role("user"));
        assert!(claims.is_admin());
        assert!(!claims.has_role("editor"));
    }

    #[test]
    fn test_non_admin_claims() {
        let claims = JwtClaims::builder()
            .subject("user-123")
            .roles(vec!["user"])
            .build();

        assert!(!claims.is_admin());
    }

    #[test]
    fn test_claims_expiration() {
        // Token expiring in 1 hour
        let claims = JwtClaims::builder()
            .subject("user-123")
            .expires_in_secs(3600)
            .build();

        assert!(!claims.is_expired());

        // Token that expired 1 hour ago
        let claims = JwtClaims::builder()
            .subject("user-123")
            .expiration(Utc::now().timestamp() - 3600)
            .build();

        assert!(claims.is_expired());
    }

    #[test]
    fn test_user_id_parsing() {
        let uuid = Uuid::new_v4();
        let claims = JwtClaims::builder().subject(uuid.to_string()).build();

        assert_eq!(claims.user_id().unwrap().as_uuid(), &uuid);

        let claims = JwtClaims::builder().subject("not-a-uuid").build();
        assert!(claims.user_id().is_none());
    }

    #[test]
    fn test_claims_serialization() {
        let claims = JwtClaims::builder()
            .subject("user-123")
            .issuer("labstore")
            .audience(vec!["labstore-api"])
            .roles(vec!["admin"])
            .email("admin@labstore.dev")
            .build();

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: JwtClaims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims.sub, deserialized.sub);
        assert_eq!(claims.roles, deserialized.roles);
        assert_eq!(claims.email, deserialized.email);
    }

    #[test]
    fn test_email_not_serialized_when_none() {
        let claims = JwtClaims::builder().subject("user-123").build();

        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("email"));
    }

    #[test]
    fn test_claims_add_role() {
        let claims = JwtClaims::builder()
            .subject("user-123")
            .add_role("user")
            .add_role("admin")
            .build();

        assert_eq!(claims.roles.len(), 2);
        assert!(claims.is_admin());
    }
}
