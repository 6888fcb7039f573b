use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{PasswordChange, ProfileUpdate, Registration};
use super::service::{AuthService, AuthServiceError};
use crate::datasource::RepositoryError;
use crate::hiring::Envelope;

/// Router builder exposing authentication and account endpoints.
pub fn user_router(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/me", get(me_handler))
        .route("/users/profile", put(profile_handler))
        .route("/users/password", put(password_handler))
        .route("/users/stats", get(stats_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    email: String,
    password: String,
}

/// Pulls the bearer credential out of the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn missing_credential() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "error": "missing bearer credential" })),
    )
        .into_response()
}

async fn login_handler(
    State(service): State<Arc<AuthService>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response {
    match service.login(&request.email, &request.password).await {
        Ok(session) => (StatusCode::OK, axum::Json(Envelope::bare(session))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn register_handler(
    State(service): State<Arc<AuthService>>,
    axum::Json(registration): axum::Json<Registration>,
) -> Response {
    match service.register(registration).await {
        Ok(session) => (StatusCode::CREATED, axum::Json(Envelope::bare(session))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn me_handler(State(service): State<Arc<AuthService>>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return missing_credential();
    };
    match service.me(token).await {
        Ok(user) => (StatusCode::OK, axum::Json(Envelope::bare(user))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn profile_handler(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
    axum::Json(update): axum::Json<ProfileUpdate>,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return missing_credential();
    };
    match service.update_profile(token, update).await {
        Ok(user) => (StatusCode::OK, axum::Json(Envelope::bare(user))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn password_handler(
    State(service): State<Arc<AuthService>>,
    headers: HeaderMap,
    axum::Json(change): axum::Json<PasswordChange>,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return missing_credential();
    };
    match service.change_password(token, change).await {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "data": { "changed": true } })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

async fn stats_handler(State(service): State<Arc<AuthService>>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return missing_credential();
    };
    match service.dashboard(token).await {
        Ok(stats) => (StatusCode::OK, axum::Json(Envelope::bare(stats))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AuthServiceError) -> Response {
    let status = match &error {
        AuthServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AuthServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AuthServiceError::Repository(RepositoryError::Unauthorized) => StatusCode::UNAUTHORIZED,
        AuthServiceError::Repository(RepositoryError::Unsupported(_)) => {
            StatusCode::METHOD_NOT_ALLOWED
        }
        AuthServiceError::Repository(RepositoryError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::memory::{InMemoryApplicationRepository, InMemoryUserGateway};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn router() -> Router {
        user_router(Arc::new(AuthService::new(
            Arc::new(InMemoryUserGateway::seeded()),
            Arc::new(InMemoryApplicationRepository::seeded()),
        )))
    }

    #[tokio::test]
    async fn me_without_a_credential_is_unauthorized() {
        let response = router()
            .oneshot(
                Request::get("/auth/me")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_round_trips_a_usable_token() {
        let router = router();
        let response = router
            .clone()
            .oneshot(
                Request::post("/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "email": "hr@example.com", "password": "hr-password" })
                            .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        let token = payload["data"]["token"].as_str().expect("token present");

        let response = router
            .oneshot(
                Request::get("/auth/me")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
