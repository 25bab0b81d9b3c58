use super::{apply_update, find_or_not_found, resolve_reference};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Patch};
use crate::utils::validate_payload;
use shared::models::{Order, OrderCreate, OrderUpdate, Table};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::AppResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    orders: Collection<Order>,
    tables: Collection<Table>,
}

impl OrderService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            orders: Collection::new(store.clone()),
            tables: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<Order>> {
        Ok(self.orders.list(query).await?)
    }

    pub async fn get(&self, order_id: &str) -> AppResult<Order> {
        find_or_not_found(&self.orders, order_id).await
    }

    /// Create an order; a supplied table must exist and the order date
    /// defaults to now
    pub async fn create(&self, payload: OrderCreate, actor: &CurrentUser) -> AppResult<Order> {
        validate_payload(&payload)?;

        if let Some(table_id) = &payload.table_id {
            resolve_reference(&self.tables, table_id).await?;
        }

        let id = new_object_id();
        let now = now();
        let order = Order {
            id: id.clone(),
            order_id: id,
            order_date: payload.order_date.unwrap_or(now),
            table_id: payload.table_id,
            created_at: now,
            updated_at: now,
        };
        self.orders.insert(&order).await?;

        tracing::info!(order_id = %order.order_id, table_id = ?order.table_id, uid = %actor.uid, "Order created");
        Ok(order)
    }

    pub async fn update(
        &self,
        order_id: &str,
        payload: OrderUpdate,
        actor: &CurrentUser,
    ) -> AppResult<Order> {
        validate_payload(&payload)?;

        if let Some(table_id) = &payload.table_id {
            resolve_reference(&self.tables, table_id).await?;
        }

        let mut patch = Patch::new();
        patch
            .set_opt("order_date", payload.order_date)?
            .set_opt("table_id", payload.table_id)?;

        let order = apply_update(&self.orders, order_id, patch).await?;
        tracing::info!(order_id, uid = %actor.uid, "Order updated");
        Ok(order)
    }
}
