//! HTTP routing configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::AppState;

use super::handlers::{
    delete_message_handler, get_all_messages_handler, get_message_by_id_handler,
    get_messages_by_account_handler, login_handler, post_message_handler, register_handler,
    update_message_handler,
};

/// Create the application router with request tracing and a timeout.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ));

    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/messages", post(post_message_handler).get(get_all_messages_handler))
        .route(
            "/messages/{message_id}",
            get(get_message_by_id_handler)
                .delete(delete_message_handler)
                .patch(update_message_handler),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(get_messages_by_account_handler),
        )
        .layer(middleware)
        .with_state(app_state)
}
