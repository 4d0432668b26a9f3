use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::health;
use super::state::AppState;
use super::translate;

/// Build the UI router: JSON endpoints plus the static page from `ui_dir`
pub fn create_router(state: AppState, ui_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/options", get(translate::options))
        .route("/api/translate", post(translate::translate))
        .fallback_service(ServeDir::new(ui_dir.as_ref()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
