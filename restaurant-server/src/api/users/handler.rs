//! User API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{LoginRequest, SignUpRequest, UserResponse};
use shared::query::{PageQuery, PaginatedResponse};
use shared::{ApiResponse, AppResult};

/// POST /users/signup - create an account, returns the user with tokens
pub async fn sign_up(
    State(state): State<ServerState>,
    Json(payload): Json<SignUpRequest>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.users.sign_up(payload).await?))
}

/// POST /users/login - returns the user with a fresh token pair
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.users.login(payload).await?))
}

/// POST /users/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(user: CurrentUser) -> ApiResponse<()> {
    tracing::info!(uid = %user.uid, "User logged out");
    ApiResponse::message("Successfully logged out")
}

/// GET /users
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<UserResponse>>> {
    Ok(Json(state.users.list(&query).await?))
}

/// GET /users/{user_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.users.get(&user_id).await?))
}
