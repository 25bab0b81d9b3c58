//! Order Item API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{OrderItem, OrderItemCreate, OrderItemUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

/// GET /orderItems - paginated order item list
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<OrderItem>>> {
    Ok(Json(state.order_items.list(&query).await?))
}

/// GET /orderItems/order/{order_id} - every item of one order
pub async fn list_by_order(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<OrderItem>>> {
    Ok(Json(state.order_items.list_by_order(&order_id).await?))
}

/// GET /orderItems/{orderItem_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    Ok(Json(state.order_items.get(&id).await?))
}

/// POST /orderItems
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderItemCreate>,
) -> AppResult<Json<OrderItem>> {
    Ok(Json(state.order_items.create(payload, &user).await?))
}

/// PATCH /orderItems/{orderItem_id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<OrderItemUpdate>,
) -> AppResult<Json<OrderItem>> {
    Ok(Json(state.order_items.update(&id, payload, &user).await?))
}
