//! Role guard middleware.
//!
//! Guards inspect the [`JwtClaims`] that the server's bearer-token middleware
//! stores in request extensions. Following the API error convention, both a
//! missing token and an insufficient role produce `401 {"error": "Unauthorized"}`.

use crate::claims::JwtClaims;
use axum::{
    body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response, Json,
};
use serde::Serialize;

/// JSON error body shared by the guards.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: &'static str,
}

fn unauthorized() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: "Unauthorized",
        }),
    )
}

/// Middleware that requires an authenticated user.
///
/// Passes the request through when `JwtClaims` are present in extensions,
/// responds 401 otherwise.
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use labstore_auth::auth_guard;
///
/// let router = Router::new()
///     .route("/cart", get(get_cart))
///     .layer(middleware::from_fn(auth_guard));
/// ```
pub async fn auth_guard(
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorBody>)> {
    if request.extensions().get::<JwtClaims>().is_none() {
        return Err(unauthorized());
    }

    Ok(next.run(request).await)
}

/// Middleware that requires the authenticated user to have the admin role.
///
/// Requires a prior bearer-token middleware to have inserted `JwtClaims` into
/// the request extensions. Responds 401 when the claims are missing or carry
/// no admin role.
pub async fn admin_guard(
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorBody>)> {
    let Some(claims) = request.extensions().get::<JwtClaims>() else {
        return Err(unauthorized());
    };

    if !claims.is_admin() {
        tracing::warn!(
            user_id = %claims.sub,
            roles = ?claims.roles,
            "Access denied: admin role required"
        );
        return Err(unauthorized());
    }

    tracing::debug!(user_id = %claims.sub, "Admin access granted");

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn test_handler() -> &'static str {
        "OK"
    }

    fn create_claims_with_roles(roles: Vec<&str>) -> JwtClaims {
        JwtClaims::builder()
            .subject("b04965e6-a9bb-4a9a-95b0-4e9e5d8f36b5")
            .issuer("labstore")
            .roles(roles)
            .expires_in_secs(3600)
            .build()
    }

    #[tokio::test]
    async fn test_admin_guard_allows_admin() {
        let app = Router::new()
            .route("/", get(test_handler))
            .layer(middleware::from_fn(admin_guard));

        let claims = create_claims_with_roles(vec!["admin"]);

        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(claims);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_guard_allows_admin_with_other_roles() {
        let app = Router::new()
            .route("/", get(test_handler))
            .layer(middleware::from_fn(admin_guard));

        let claims = create_claims_with_roles(vec!["user", "admin"]);

        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(claims);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_guard_denies_non_admin() {
        let app = Router::new()
            .route("/", get(test_handler))
            .layer(middleware::from_fn(admin_guard));

        let claims = create_claims_with_roles(vec!["user"]);

        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(claims);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_guard_denies_no_claims() {
        let app = Router::new()
            .route("/", get(test_handler))
            .layer(middleware::from_fn(admin_guard));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_guard_allows_any_authenticated_user() {
        let app = Router::new()
            .route("/", get(test_handler))
            .layer(middleware::from_fn(auth_guard));

        let claims = create_claims_with_roles(vec!["user"]);

        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(claims);

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_auth_guard_denies_anonymous() {
        let app = Router::new()
            .route("/", get(test_handler))
            .layer(middleware::from_fn(auth_guard));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
