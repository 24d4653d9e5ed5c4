/// Visit counting for the static site
use crate::state::AppState;
use axum::{extract::Request, extract::State, middleware::Next, response::Response};

/// Middleware that counts every request before passing it on
pub async fn count_hits(State(app_state): State<AppState>, request: Request, next: Next) -> Response {
    app_state.record_hit();
    next.run(request).await
}
