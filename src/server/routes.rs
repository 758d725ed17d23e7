//! Routes and request logging

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Application title
pub const APP_TITLE: &str = "Fitness WebApp API";

/// Message returned by the root endpoint
pub const WELCOME_MESSAGE: &str = "Welcome to the Fitness WebApp API";

/// Application metadata shared with every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Human-readable application title
    pub title: String,
}

impl AppInfo {
    /// Creates metadata with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self::new(APP_TITLE)
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub message: String,
}

impl Default for WelcomeMessage {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// Body of error responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Build the application router
pub fn router(info: AppInfo) -> Router {
    let info = Arc::new(info);
    Router::new()
        .route("/", get(read_root))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn_with_state(info, log_request))
}

async fn read_root() -> Json<WelcomeMessage> {
    Json(WelcomeMessage::default())
}

async fn not_found() -> (StatusCode, Json<ErrorDetail>) {
    (StatusCode::NOT_FOUND, Json(ErrorDetail::new("Not Found")))
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorDetail>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDetail::new("Method Not Allowed")),
    )
}

async fn log_request(
    State(info): State<Arc<AppInfo>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        app = %info.title,
        "{} {} {} ({:.1?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
