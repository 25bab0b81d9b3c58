//! Document store abstraction
//!
//! Services talk to the store through [`DocumentStore`], which works on
//! plain JSON documents keyed by their `_id` field.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use shared::AppError;
use std::time::Duration;
use thiserror::Error;

/// A stored document
pub type Document = Map<String, Value>;

/// Field holding the document key
pub const KEY_FIELD: &str = "_id";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to decode {collection} document: {message}")]
    Decode { collection: String, message: String },

    #[error("failed to encode document: {0}")]
    Encode(String),

    #[error("document has no _id key")]
    MissingKey,
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encode(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Timeout(_) => AppError::timeout(err.to_string()),
            other => AppError::database(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Equality filter; all clauses must hold
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(&'static str, Value)>,
}

impl Filter {
    /// Match every document
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(field: &'static str, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    pub fn and(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.clauses.push((field, value.into()));
        self
    }

    pub fn clauses(&self) -> &[(&'static str, Value)] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True when the document satisfies every clause
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(*field) == Some(value))
    }
}

/// Merge set applied by an update; only staged fields are written
#[derive(Debug, Clone, Default)]
pub struct Patch {
    fields: Document,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: Serialize>(&mut self, field: &'static str, value: T) -> StoreResult<&mut Self> {
        self.fields.insert(field.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Stage the value only when present
    pub fn set_opt<T: Serialize>(
        &mut self,
        field: &'static str,
        value: Option<T>,
    ) -> StoreResult<&mut Self> {
        if let Some(value) = value {
            self.set(field, value)?;
        }
        Ok(self)
    }

    pub fn fields(&self) -> &Document {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Window of a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

/// Result of [`DocumentStore::update_one`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// An existing document was merged
    Updated { key: String },
    /// Nothing matched and a new document was created from filter and patch
    Inserted { key: String },
    /// Nothing matched and upsert was off
    NoMatch,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document; its `_id` field becomes the key
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<()>;

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// Matching documents in key (insertion) order
    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
        page: Option<Page>,
    ) -> StoreResult<Vec<Document>>;

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Merge `patch` into the first matching document
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches() {
        let doc = json!({"_id": "a", "order_id": "o1", "quantity": 2});
        let doc = doc.as_object().unwrap();

        assert!(Filter::all().matches(doc));
        assert!(Filter::eq("order_id", "o1").matches(doc));
        assert!(Filter::eq("order_id", "o1").and("quantity", 2).matches(doc));
        assert!(!Filter::eq("order_id", "o2").matches(doc));
        assert!(!Filter::eq("missing", "x").matches(doc));
    }

    #[test]
    fn test_patch_skips_absent_values() {
        let mut patch = Patch::new();
        patch.set_opt("name", Some("Soup")).unwrap();
        patch.set_opt::<f64>("price", None).unwrap();
        patch.set("quantity", 3).unwrap();

        assert_eq!(patch.fields().len(), 2);
        assert_eq!(patch.fields()["name"], "Soup");
        assert!(!patch.fields().contains_key("price"));
    }

    #[test]
    fn test_store_error_maps_to_system_errors() {
        let err: AppError = StoreError::Timeout(Duration::from_secs(100)).into();
        assert_eq!(err.code, shared::ErrorCode::TimeoutError);

        let err: AppError = StoreError::Database("boom".into()).into();
        assert_eq!(err.code, shared::ErrorCode::DatabaseError);
    }
}
