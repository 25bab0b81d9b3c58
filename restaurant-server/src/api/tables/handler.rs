//! Dining Table API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{Table, TableCreate, TableUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

/// GET /tables - paginated list of dining tables
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Table>>> {
    Ok(Json(state.tables.list(&query).await?))
}

/// GET /tables/{table_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Table>> {
    Ok(Json(state.tables.get(&id).await?))
}

/// POST /tables
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<TableCreate>,
) -> AppResult<Json<Table>> {
    Ok(Json(state.tables.create(payload, &user).await?))
}

/// PATCH /tables/{table_id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<TableUpdate>,
) -> AppResult<Json<Table>> {
    Ok(Json(state.tables.update(&id, payload, &user).await?))
}
