//! HTTP application assembly

use crate::auth::require_auth;
use crate::core::ServerState;
use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .merge(crate::api::health::router())
        .merge(crate::api::users::public_router())
}

/// Routes behind the token gate
fn protected_routes() -> Router<ServerState> {
    Router::new()
        .merge(crate::api::users::protected_router())
        .merge(crate::api::foods::router())
        .merge(crate::api::menus::router())
        .merge(crate::api::tables::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::order_items::router())
        .merge(crate::api::invoices::router())
        .merge(crate::api::notes::router())
}

/// Build the complete application for the given state
///
/// Used by the server and by in-process tests alike.
pub fn build_router(state: ServerState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes().merge(protected).with_state(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                HeaderName::from_static(REQUEST_ID_HEADER),
                XRequestId,
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(log_request))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive()),
    )
}
