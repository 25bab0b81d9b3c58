//! Typed access to one collection
//!
//! [`Collection<T>`] wraps the shared [`DocumentStore`] handle and converts
//! between entity structs and stored documents.

use super::store::{Document, DocumentStore, Filter, Page, Patch, StoreError, StoreResult, UpdateOutcome};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{Food, Invoice, Menu, Note, Order, OrderItem, Table, User};
use shared::query::{PageQuery, PaginatedResponse};
use std::marker::PhantomData;
use std::sync::Arc;

/// A document type stored in its own collection
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection (table) name
    const COLLECTION: &'static str;
    /// Field holding the domain id
    const ID_FIELD: &'static str;
    /// Name used in error messages
    const RESOURCE: &'static str;
}

macro_rules! entity {
    ($ty:ty, $collection:literal, $id_field:literal, $resource:literal) => {
        impl Entity for $ty {
            const COLLECTION: &'static str = $collection;
            const ID_FIELD: &'static str = $id_field;
            const RESOURCE: &'static str = $resource;
        }
    };
}

entity!(User, "users", "user_id", "user");
entity!(Food, "foods", "food_id", "food");
entity!(Menu, "menus", "menu_id", "menu");
entity!(Table, "tables", "table_id", "table");
entity!(Order, "orders", "order_id", "order");
entity!(OrderItem, "order_items", "order_item_id", "order item");
entity!(Invoice, "invoices", "invoice_id", "invoice");
entity!(Note, "notes", "note_id", "note");

pub struct Collection<T> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub async fn insert(&self, entity: &T) -> StoreResult<()> {
        match serde_json::to_value(entity)? {
            Value::Object(doc) => self.store.insert_one(T::COLLECTION, doc).await,
            _ => Err(StoreError::Encode(format!(
                "{} did not serialize to an object",
                T::RESOURCE
            ))),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        self.find_one(&Filter::eq(T::ID_FIELD, id)).await
    }

    pub async fn find_one(&self, filter: &Filter) -> StoreResult<Option<T>> {
        self.store
            .find_one(T::COLLECTION, filter)
            .await?
            .map(decode::<T>)
            .transpose()
    }

    /// All matching entities in insertion order
    pub async fn find_all(&self, filter: &Filter) -> StoreResult<Vec<T>> {
        self.store
            .find_many(T::COLLECTION, filter, None)
            .await?
            .into_iter()
            .map(decode::<T>)
            .collect()
    }

    /// One page of the collection plus the collection total
    pub async fn list(&self, query: &PageQuery) -> StoreResult<PaginatedResponse<T>> {
        let (page, limit) = (query.page(), query.limit());
        let window = Page {
            skip: query.offset(),
            limit: u64::from(limit),
        };

        let total = self.store.count(T::COLLECTION, &Filter::all()).await?;
        let data = self
            .store
            .find_many(T::COLLECTION, &Filter::all(), Some(window))
            .await?
            .into_iter()
            .map(decode::<T>)
            .collect::<StoreResult<Vec<T>>>()?;

        Ok(PaginatedResponse::new(data, total, page, limit))
    }

    /// Merge `patch` into the entity with domain id `id`, refreshing
    /// `updated_at`. Returns the merged entity, or `None` when no such
    /// entity exists (nothing is created).
    pub async fn update_by_id(&self, id: &str, mut patch: Patch) -> StoreResult<Option<T>> {
        patch.set("updated_at", shared::util::now())?;

        let filter = Filter::eq(T::ID_FIELD, id);
        match self
            .store
            .update_one(T::COLLECTION, &filter, &patch, false)
            .await?
        {
            UpdateOutcome::NoMatch => Ok(None),
            UpdateOutcome::Updated { .. } | UpdateOutcome::Inserted { .. } => {
                self.find_one(&filter).await
            }
        }
    }
}

fn decode<T: Entity>(doc: Document) -> StoreResult<T> {
    serde_json::from_value(Value::Object(doc)).map_err(|e| StoreError::Decode {
        collection: T::COLLECTION.to_string(),
        message: e.to_string(),
    })
}
