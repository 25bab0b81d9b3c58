use super::{apply_update, find_or_not_found, resolve_reference};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Patch};
use crate::utils::{required, validate_payload};
use shared::models::{Food, FoodCreate, FoodUpdate, Menu};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::AppResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct FoodService {
    foods: Collection<Food>,
    menus: Collection<Menu>,
}

impl FoodService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            foods: Collection::new(store.clone()),
            menus: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<Food>> {
        Ok(self.foods.list(query).await?)
    }

    pub async fn get(&self, food_id: &str) -> AppResult<Food> {
        find_or_not_found(&self.foods, food_id).await
    }

    /// Create a food; its menu must exist
    pub async fn create(&self, payload: FoodCreate, actor: &CurrentUser) -> AppResult<Food> {
        validate_payload(&payload)?;

        let menu_id = required(payload.menu_id, "menu_id")?;
        resolve_reference(&self.menus, &menu_id).await?;

        let id = new_object_id();
        let now = now();
        let food = Food {
            id: id.clone(),
            food_id: id,
            name: required(payload.name, "name")?,
            price: required(payload.price, "price")?,
            food_image: required(payload.food_image, "food_image")?,
            menu_id,
            created_at: now,
            updated_at: now,
        };
        self.foods.insert(&food).await?;

        tracing::info!(food_id = %food.food_id, menu_id = %food.menu_id, uid = %actor.uid, "Food created");
        Ok(food)
    }

    pub async fn update(
        &self,
        food_id: &str,
        payload: FoodUpdate,
        actor: &CurrentUser,
    ) -> AppResult<Food> {
        validate_payload(&payload)?;

        if let Some(menu_id) = &payload.menu_id {
            resolve_reference(&self.menus, menu_id).await?;
        }

        let mut patch = Patch::new();
        patch
            .set_opt("name", payload.name)?
            .set_opt("price", payload.price)?
            .set_opt("food_image", payload.food_image)?
            .set_opt("menu_id", payload.menu_id)?;

        let food = apply_update(&self.foods, food_id, patch).await?;
        tracing::info!(food_id, uid = %actor.uid, "Food updated");
        Ok(food)
    }
}
