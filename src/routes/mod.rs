//! Router assembly.

mod common;
mod entity;

pub use common::{common_routes, no_route};
pub use entity::entity_routes;

use crate::config::BODY_LIMIT_BYTES;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The full application: operational and entity routes, 404 fallback,
/// body size limit and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
        .fallback(no_route)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
