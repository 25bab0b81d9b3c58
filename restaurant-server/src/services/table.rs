use super::{apply_update, find_or_not_found};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Patch};
use crate::utils::{required, validate_payload};
use shared::models::{Table, TableCreate, TableUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::AppResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct TableService {
    tables: Collection<Table>,
}

impl TableService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            tables: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<Table>> {
        Ok(self.tables.list(query).await?)
    }

    pub async fn get(&self, table_id: &str) -> AppResult<Table> {
        find_or_not_found(&self.tables, table_id).await
    }

    pub async fn create(&self, payload: TableCreate, actor: &CurrentUser) -> AppResult<Table> {
        validate_payload(&payload)?;

        let id = new_object_id();
        let now = now();
        let table = Table {
            id: id.clone(),
            table_id: id,
            number_of_guests: required(payload.number_of_guests, "number_of_guests")?,
            table_number: required(payload.table_number, "table_number")?,
            created_at: now,
            updated_at: now,
        };
        self.tables.insert(&table).await?;

        tracing::info!(table_id = %table.table_id, table_number = table.table_number, uid = %actor.uid, "Table created");
        Ok(table)
    }

    pub async fn update(
        &self,
        table_id: &str,
        payload: TableUpdate,
        actor: &CurrentUser,
    ) -> AppResult<Table> {
        validate_payload(&payload)?;

        let mut patch = Patch::new();
        patch
            .set_opt("number_of_guests", payload.number_of_guests)?
            .set_opt("table_number", payload.table_number)?;

        let table = apply_update(&self.tables, table_id, patch).await?;
        tracing::info!(table_id, uid = %actor.uid, "Table updated");
        Ok(table)
    }
}
