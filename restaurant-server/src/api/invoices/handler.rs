//! Invoice API Handlers

use axum::extract::{Path, Query, State};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::Json;
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::AppResult;

/// GET /invoices - paginated invoice list
pub async fn list(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Invoice>>> {
    Ok(Json(state.invoices.list(&query).await?))
}

/// GET /invoices/{invoice_id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    Ok(Json(state.invoices.get(&id).await?))
}

/// POST /invoices
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<Json<Invoice>> {
    Ok(Json(state.invoices.create(payload, &user).await?))
}

/// PATCH /invoices/{invoice_id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    Ok(Json(state.invoices.update(&id, payload, &user).await?))
}
