/// API route modules
pub mod admin;
pub mod auth;
pub mod chirps;
pub mod health;
pub mod users;
pub mod webhooks;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::{path::Path, sync::Arc, time::Duration};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Requests still running after this long are answered with 408
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the full application router
///
/// `static_dir` is served under `/app/`, counting each request as a visit.
pub fn router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/reset", get(admin::reset))
        .route("/users", post(users::create_user))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/chirps", get(chirps::list_chirps))
        .route("/chirps/:id", get(chirps::get_chirp))
        .route("/polka/webhooks", post(webhooks::polka_webhook));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/users", put(users::update_user))
        .route("/chirps", post(chirps::create_chirp))
        .route("/chirps/:id", delete(chirps::delete_chirp))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    // Static site, counted by the visit counter
    let app_routes = Router::new()
        .nest_service("/app", ServeDir::new(static_dir.as_ref()))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::count_hits,
        ));

    let app = Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .route("/admin/metrics", get(admin::metrics))
        .merge(app_routes);

    with_common_layers(app).with_state(app_state)
}

/// Timeout, tracing and CORS shared by every route
fn with_common_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
}
