//! Food API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{Food, FoodCreate, FoodUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

/// GET /foods - paginated food list
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Food>>> {
    Ok(Json(state.foods.list(&query).await?))
}

/// GET /foods/{food_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Food>> {
    Ok(Json(state.foods.get(&id).await?))
}

/// POST /foods
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<FoodCreate>,
) -> AppResult<Json<Food>> {
    Ok(Json(state.foods.create(payload, &user).await?))
}

/// PATCH /foods/{food_id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<FoodUpdate>,
) -> AppResult<Json<Food>> {
    Ok(Json(state.foods.update(&id, payload, &user).await?))
}
