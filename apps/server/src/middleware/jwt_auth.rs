//! Bearer token validation middleware.
//!
//! Validates the `Authorization: Bearer` header when present and stores the
//! decoded [`JwtClaims`] in request extensions for the route guards and
//! handlers downstream. Requests without an Authorization header pass
//! through unauthenticated; catalog reads are public, and the per-router
//! guards reject anonymous access everywhere it is required.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use labstore_auth::decode_token;
use serde_json::json;
use std::sync::Arc;

/// PEM-encoded RSA public key for token validation, provided to the
/// middleware through request extensions.
#[derive(Debug, Clone)]
pub struct JwtPublicKey(pub Arc<Vec<u8>>);

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": message })),
    )
        .into_response()
}

/// Validate a bearer token when one is supplied.
///
/// - No Authorization header: the request continues without claims.
/// - A well-formed `Bearer` token: claims are decoded and inserted, or the
///   request is rejected with 401 when the token is invalid or expired.
/// - Any other Authorization format: 401.
pub async fn optional_jwt_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(auth_header) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned)
    else {
        return Ok(next.run(request).await);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return Err(unauthorized("Invalid Authorization header format"));
    };

    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err(unauthorized("Empty bearer token"));
    }

    let public_key = request
        .extensions()
        .get::<JwtPublicKey>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("JWT public key not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        })?;

    match decode_token(token, &public_key.0) {
        Ok(claims) => {
            tracing::debug!(user_id = %claims.sub, "Bearer token accepted");
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Bearer token rejected");
            Err(unauthorized("Unauthorized"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::Request, middleware, routing::get, Extension, Router};
    use labstore_auth::JwtClaims;
    use tower::util::ServiceExt;

    const TEST_PRIVATE_KEY: &str =
        include_str!("../../../../crates/labstore-auth/test_fixtures/test_key.pem");
    const TEST_PUBLIC_KEY: &str =
        include_str!("../../../../crates/labstore-auth/test_fixtures/test_key.pub.pem");

    async fn whoami(claims: Option<Extension<JwtClaims>>) -> String {
        match claims {
            Some(Extension(claims)) => claims.sub,
            None => "anonymous".to_string(),
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(whoami))
            .layer(middleware::from_fn(optional_jwt_auth_middleware))
            .layer(Extension(JwtPublicKey(Arc::new(
                TEST_PUBLIC_KEY.as_bytes().to_vec(),
            ))))
    }

    #[tokio::test]
    async fn test_no_header_passes_through_anonymous() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"anonymous");
    }

    #[tokio::test]
    async fn test_valid_token_inserts_claims() {
        let claims = JwtClaims::builder()
            .subject("b04965e6-a9bb-4a9a-95b0-4e9e5d8f36b5")
            .issuer("labstore")
            .expires_in_secs(3600)
            .build();
        let token =
            labstore_auth::encode_token(&claims, TEST_PRIVATE_KEY.as_bytes()).unwrap();

        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"b04965e6-a9bb-4a9a-95b0-4e9e5d8f36b5");
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("Authorization", "Bearer garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_header_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("Authorization", "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
