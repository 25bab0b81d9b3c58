use super::{apply_update, find_or_not_found, resolve_reference};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Filter, Patch};
use crate::utils::{required, validate_payload};
use shared::models::{Food, Order, OrderItem, OrderItemCreate, OrderItemUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::AppResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderItemService {
    items: Collection<OrderItem>,
    orders: Collection<Order>,
    foods: Collection<Food>,
}

impl OrderItemService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            items: Collection::new(store.clone()),
            orders: Collection::new(store.clone()),
            foods: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<OrderItem>> {
        Ok(self.items.list(query).await?)
    }

    pub async fn get(&self, order_item_id: &str) -> AppResult<OrderItem> {
        find_or_not_found(&self.items, order_item_id).await
    }

    /// Every item of an order, in the order they were added
    pub async fn list_by_order(&self, order_id: &str) -> AppResult<Vec<OrderItem>> {
        find_or_not_found(&self.orders, order_id).await?;
        Ok(self.items.find_all(&Filter::eq("order_id", order_id)).await?)
    }

    /// Create an item; order and food must exist and the unit price
    /// defaults to the food's price
    pub async fn create(
        &self,
        payload: OrderItemCreate,
        actor: &CurrentUser,
    ) -> AppResult<OrderItem> {
        validate_payload(&payload)?;

        let order_id = required(payload.order_id, "order_id")?;
        let food_id = required(payload.food_id, "food_id")?;
        resolve_reference(&self.orders, &order_id).await?;
        let food = resolve_reference(&self.foods, &food_id).await?;

        let id = new_object_id();
        let now = now();
        let item = OrderItem {
            id: id.clone(),
            order_item_id: id,
            order_id,
            food_id,
            quantity: required(payload.quantity, "quantity")?,
            unit_price: payload.unit_price.unwrap_or(food.price),
            created_at: now,
            updated_at: now,
        };
        self.items.insert(&item).await?;

        tracing::info!(
            order_item_id = %item.order_item_id,
            order_id = %item.order_id,
            food_id = %item.food_id,
            uid = %actor.uid,
            "Order item created"
        );
        Ok(item)
    }

    pub async fn update(
        &self,
        order_item_id: &str,
        payload: OrderItemUpdate,
        actor: &CurrentUser,
    ) -> AppResult<OrderItem> {
        validate_payload(&payload)?;

        if let Some(order_id) = &payload.order_id {
            resolve_reference(&self.orders, order_id).await?;
        }
        if let Some(food_id) = &payload.food_id {
            resolve_reference(&self.foods, food_id).await?;
        }

        let mut patch = Patch::new();
        patch
            .set_opt("quantity", payload.quantity)?
            .set_opt("unit_price", payload.unit_price)?
            .set_opt("food_id", payload.food_id)?
            .set_opt("order_id", payload.order_id)?;

        let item = apply_update(&self.items, order_item_id, patch).await?;
        tracing::info!(order_item_id, uid = %actor.uid, "Order item updated");
        Ok(item)
    }
}
