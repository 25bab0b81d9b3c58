//! Menu API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{Menu, MenuCreate, MenuUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

/// GET /menus - paginated menu list
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Menu>>> {
    Ok(Json(state.menus.list(&query).await?))
}

/// GET /menus/{menu_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    Ok(Json(state.menus.get(&id).await?))
}

/// POST /menus
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    Ok(Json(state.menus.create(payload, &user).await?))
}

/// PATCH /menus/{menu_id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<MenuUpdate>,
) -> AppResult<Json<Menu>> {
    Ok(Json(state.menus.update(&id, payload, &user).await?))
}
