use super::{apply_update, find_or_not_found};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Patch};
use crate::utils::{required, validate_menu_window, validate_payload};
use shared::models::{Menu, MenuCreate, MenuUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::AppResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct MenuService {
    menus: Collection<Menu>,
}

impl MenuService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            menus: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<Menu>> {
        Ok(self.menus.list(query).await?)
    }

    pub async fn get(&self, menu_id: &str) -> AppResult<Menu> {
        find_or_not_found(&self.menus, menu_id).await
    }

    pub async fn create(&self, payload: MenuCreate, actor: &CurrentUser) -> AppResult<Menu> {
        validate_payload(&payload)?;

        let id = new_object_id();
        let now = now();
        let menu = Menu {
            id: id.clone(),
            menu_id: id,
            name: required(payload.name, "name")?,
            category: required(payload.category, "category")?,
            start_date: payload.start_date,
            end_date: payload.end_date,
            created_at: now,
            updated_at: now,
        };
        self.menus.insert(&menu).await?;

        tracing::info!(menu_id = %menu.menu_id, uid = %actor.uid, "Menu created");
        Ok(menu)
    }

    /// Update a menu. Dates are only written as a pair, and only while the
    /// new window is running (`start < now < end`); a lone date is dropped.
    pub async fn update(
        &self,
        menu_id: &str,
        payload: MenuUpdate,
        actor: &CurrentUser,
    ) -> AppResult<Menu> {
        validate_payload(&payload)?;
        validate_menu_window(payload.start_date, payload.end_date, now())?;

        let mut patch = Patch::new();
        patch
            .set_opt("name", payload.name)?
            .set_opt("category", payload.category)?;
        if let (Some(start), Some(end)) = (payload.start_date, payload.end_date) {
            patch.set("start_date", start)?.set("end_date", end)?;
        }

        let menu = apply_update(&self.menus, menu_id, patch).await?;
        tracing::info!(menu_id, uid = %actor.uid, "Menu updated");
        Ok(menu)
    }
}
