//! Order Item API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/orderItems", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{orderItem_id}", get(handler::get_by_id).patch(handler::update))
        .route("/order/{order_id}", get(handler::list_by_order))
}
