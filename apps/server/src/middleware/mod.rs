//! Server middleware.

mod jwt_auth;

pub use jwt_auth::{optional_jwt_auth_middleware, JwtPublicKey};
