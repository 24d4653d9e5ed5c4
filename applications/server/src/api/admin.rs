/// Admin API routes
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

/// GET /admin/metrics
/// Report how many times the static site has been visited
pub async fn metrics(State(app_state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>
"#,
        app_state.hits()
    ))
}

/// GET /api/reset
/// Reset the visit counter
pub async fn reset(State(app_state): State<AppState>) -> impl IntoResponse {
    app_state.reset_hits();
    tracing::info!("Visit counter reset");
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Hits reset to 0",
    )
}
