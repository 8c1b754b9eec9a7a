use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use ticket_board::BoardHandle;

use crate::handler;

/// Build the axum router with all board endpoints.
pub fn build_router(board: BoardHandle) -> Router {
    Router::new()
        .route("/add", post(handler::add_handler))
        .route(
            "/list",
            get(handler::list_handler).post(handler::modify_handler),
        )
        .route("/get", get(handler::get_handler))
        .fallback(handler::bad_request_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(board)
}
