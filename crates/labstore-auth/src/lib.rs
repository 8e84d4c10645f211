//! JWT validation and password hashing library for labstore.
//!
//! This crate provides:
//! - JWT RS256 decoding with standard and custom claims (token issuance is
//!   delegated to the external identity provider)
//! - Argon2id password hashing with OWASP-recommended parameters
//! - Axum middleware guards for authenticated and admin-only routes
//!
//! # Example
//!
//! ```rust,ignore
//! use labstore_auth::{decode_token, hash_password, verify_password, JwtClaims};
//!
//! // Validate a bearer token
//! let claims = decode_token(&token, public_key_pem)?;
//! assert!(claims.has_role("admin"));
//!
//! // Hash a password on user creation
//! let hash = hash_password("my-secure-password")?;
//! assert!(verify_password("my-secure-password", &hash)?);
//! ```

mod claims;
mod error;
mod jwt;
mod middleware;
mod password;

// Re-export public API
pub use claims::{JwtClaims, JwtClaimsBuilder, ADMIN_ROLE};
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_with_config, encode_token, ValidationConfig};
pub use middleware::{admin_guard, auth_guard};
pub use password::{hash_password, verify_password};
