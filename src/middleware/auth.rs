use axum::response::{IntoResponse, Response};
use axum::http::Request;
use axum::middleware::Next;
use crate::auth::jwt::verify_token;
use crate::error::AppError;

/// Identity decoded from the bearer token, attached to the request for
/// downstream handlers. Threaded explicitly via `Extension`, never stored
/// in shared state.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub customer_id: i64,
    pub username: String,
}

/// Fail-closed bearer gate for mutating endpoints.
///
/// An `Authorization` header that is absent or carries no token segment
/// -> 403, the handler is never invoked. Present but unverifiable token
/// (bad signature, expired, malformed payload) -> 401. On success the decoded claims ride along as an
/// `AuthContext` extension.
pub async fn require_auth(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    // "Bearer <token>": the second whitespace-separated segment is the
    // credential. Only a header without that segment counts as missing;
    // anything presented as a token goes through verification.
    let token = match auth_header.and_then(|h| h.split_whitespace().nth(1)) {
        Some(t) => t,
        None => return AppError::forbidden("Authentication required").into_response(),
    };

    let secret = match std::env::var("JWT_SECRET") {
        Ok(s) => s,
        Err(_) => return AppError::internal("JWT secret not configured").into_response(),
    };

    let claims = match verify_token(token, &secret) {
        Ok(c) => c,
        Err(_) => return AppError::unauthorized("Invalid token").into_response(),
    };

    req.extensions_mut().insert(AuthContext {
        customer_id: claims.sub,
        username: claims.username,
    });

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::sign_token;
    use axum::{middleware, routing::get, Extension, Router};
    use axum::body::Body;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    const SECRET: &str = "integration-test-secret";

    async fn whoami(Extension(auth): Extension<AuthContext>) -> String {
        format!("{}:{}", auth.customer_id, auth.username)
    }

    fn app() -> Router {
        std::env::set_var("JWT_SECRET", SECRET);
        Router::new()
            .route("/protected", get(whoami))
            .layer(middleware::from_fn(require_auth))
    }

    fn request(auth_header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(h) = auth_header {
            builder = builder.header("Authorization", h);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_403() {
        let res = app().oneshot(request(None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn tokenless_header_is_403() {
        let res = app().oneshot(request(Some("Bearer"))).await.unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = app().oneshot(request(Some("Bearer "))).await.unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unverifiable_second_segment_is_401() {
        // Any two-segment header is treated as presenting a token, whatever
        // the scheme; an unverifiable one fails with 401, not 403.
        let res = app().oneshot(request(Some("Token abc"))).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_token_is_401() {
        let res = app()
            .oneshot(request(Some("Bearer not.a.token")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_401() {
        let token = sign_token(7, "mallory", "some-other-secret").unwrap();
        let res = app()
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_reaches_handler_with_claims() {
        let token = sign_token(7, "somchai", SECRET).unwrap();
        let res = app()
            .oneshot(request(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"7:somchai");
    }
}
