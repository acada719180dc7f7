use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod health;
mod portfolio;

/// Compose the full application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router().merge(portfolio::router()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
