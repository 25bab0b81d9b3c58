//! Note API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{Note, NoteCreate, NoteUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Note>>> {
    Ok(Json(state.notes.list(&query).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Note>> {
    Ok(Json(state.notes.get(&id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<NoteCreate>,
) -> AppResult<Json<Note>> {
    Ok(Json(state.notes.create(payload, &user).await?))
}

pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<NoteUpdate>,
) -> AppResult<Json<Note>> {
    Ok(Json(state.notes.update(&id, payload, &user).await?))
}
