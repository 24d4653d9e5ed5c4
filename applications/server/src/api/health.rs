/// Health check API routes
use axum::{http::header, response::IntoResponse};

/// GET /api/healthz - Health check endpoint
pub async fn healthz() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
