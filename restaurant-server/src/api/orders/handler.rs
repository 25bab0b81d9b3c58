//! Order API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{Order, OrderCreate, OrderUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

/// GET /orders - paginated order list
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Order>>> {
    Ok(Json(state.orders.list(&query).await?))
}

/// GET /orders/{order_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get(&id).await?))
}

/// POST /orders
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.create(payload, &user).await?))
}

/// PATCH /orders/{order_id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.update(&id, payload, &user).await?))
}
