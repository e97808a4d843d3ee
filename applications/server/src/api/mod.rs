/// API route modules
pub mod extract;
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router
///
/// Create, update and delete are form-style posts; update and delete carry
/// the user id in the body.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::index))
        .route("/users/create", get(users::create))
        .route("/users/store", post(users::store))
        .route("/users/update", post(users::update))
        .route("/users/delete", post(users::delete))
        .route("/users/:id", get(users::show))
        .route("/users/:id/edit", get(users::edit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
