//! School API routes and the assembled application router.

use crate::handlers::{add_school, list_schools, method_not_allowed, not_found, panic_response, welcome};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Binds `GET /`, `POST /addSchool` and `GET /listSchools`.
pub fn school_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome).fallback(method_not_allowed))
        .route("/addSchool", post(add_school).fallback(method_not_allowed))
        .route("/listSchools", get(list_schools).fallback(method_not_allowed))
        .with_state(state)
}

/// School routes plus 404 fallback, request tracing, body limit and panic recovery.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    school_routes(state)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}
