//! SurrealDB implementation of [`DocumentStore`]
//!
//! One table per collection. The record key equals the document's `_id`;
//! documents are read back without the record id so they stay plain JSON.
//! Every operation is bounded by the configured timeout.

use super::store::{
    Document, DocumentStore, Filter, KEY_FIELD, Page, Patch, StoreError, StoreResult,
    UpdateOutcome,
};
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::method::Query;

#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Any>,
    timeout: Duration,
}

impl SurrealStore {
    /// Connect to `url` (`mem://`, `rocksdb://path`, `ws://host:port`)
    pub async fn connect(
        url: &str,
        namespace: &str,
        database: &str,
        timeout: Duration,
    ) -> StoreResult<Self> {
        let db = any::connect(url).await?;
        db.use_ns(namespace).use_db(database).await?;
        tracing::info!(url, namespace, database, "Document store connected");
        Ok(Self { db, timeout })
    }

    async fn bounded<T, F>(&self, fut: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }

    async fn select(
        &self,
        collection: &str,
        filter: &Filter,
        page: Option<Page>,
    ) -> StoreResult<Vec<Document>> {
        let mut sql = format!(
            "SELECT * OMIT id FROM type::table($tb){} ORDER BY {}",
            where_clause(filter),
            escape(KEY_FIELD)
        );
        if page.is_some() {
            sql.push_str(" LIMIT $limit START $start");
        }

        let mut query = bind_filter(
            self.db.query(sql).bind(("tb", collection.to_owned())),
            filter,
        );
        if let Some(page) = page {
            query = query.bind(("limit", page.limit)).bind(("start", page.skip));
        }

        let rows: Vec<Value> = query.await?.check()?.take(0)?;
        rows.into_iter()
            .map(|row| match row {
                Value::Object(doc) => Ok(doc),
                other => Err(StoreError::Decode {
                    collection: collection.to_owned(),
                    message: format!("expected an object, got {other}"),
                }),
            })
            .collect()
    }

    async fn merge(&self, collection: &str, key: &str, patch: &Patch) -> StoreResult<()> {
        self.db
            .query("UPDATE type::thing($tb, $key) MERGE $patch RETURN NONE")
            .bind(("tb", collection.to_owned()))
            .bind(("key", key.to_owned()))
            .bind(("patch", Value::Object(patch.fields().clone())))
            .await?
            .check()?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for SurrealStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<()> {
        let key = document_key(&doc)?;
        self.bounded(async {
            self.db
                .query("CREATE type::thing($tb, $key) CONTENT $doc RETURN NONE")
                .bind(("tb", collection.to_owned()))
                .bind(("key", key))
                .bind(("doc", Value::Object(doc)))
                .await?
                .check()?;
            Ok(())
        })
        .await
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let page = Page { skip: 0, limit: 1 };
        let docs = self
            .bounded(self.select(collection, filter, Some(page)))
            .await?;
        Ok(docs.into_iter().next())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
        page: Option<Page>,
    ) -> StoreResult<Vec<Document>> {
        self.bounded(self.select(collection, filter, page)).await
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let sql = format!(
            "SELECT count() AS total FROM type::table($tb){} GROUP ALL",
            where_clause(filter)
        );
        self.bounded(async {
            let query = bind_filter(
                self.db.query(sql).bind(("tb", collection.to_owned())),
                filter,
            );
            let rows: Vec<Value> = query.await?.check()?.take(0)?;
            // GROUP ALL yields no row at all for an empty table
            Ok(rows
                .first()
                .and_then(|row| row.get("total"))
                .and_then(Value::as_u64)
                .unwrap_or(0))
        })
        .await
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        match self.find_one(collection, filter).await? {
            Some(doc) => {
                let key = document_key(&doc)?;
                self.bounded(self.merge(collection, &key, patch)).await?;
                Ok(UpdateOutcome::Updated { key })
            }
            None if upsert => {
                let mut doc = Document::new();
                for (field, value) in filter.clauses() {
                    doc.insert((*field).to_string(), value.clone());
                }
                doc.extend(patch.fields().clone());
                doc.entry(KEY_FIELD)
                    .or_insert_with(|| Value::String(shared::util::new_object_id()));

                let key = document_key(&doc)?;
                self.insert_one(collection, doc).await?;
                Ok(UpdateOutcome::Inserted { key })
            }
            None => Ok(UpdateOutcome::NoMatch),
        }
    }
}

fn document_key(doc: &Document) -> StoreResult<String> {
    doc.get(KEY_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(StoreError::MissingKey)
}

/// Field names are compile-time constants; escape them anyway so that a
/// leading underscore or keyword never changes the statement
fn escape(field: &str) -> String {
    format!("`{}`", field.replace('`', ""))
}

fn where_clause(filter: &Filter) -> String {
    if filter.is_empty() {
        return String::new();
    }
    let conditions: Vec<String> = filter
        .clauses()
        .iter()
        .enumerate()
        .map(|(i, (field, _))| format!("{} = $f{i}", escape(field)))
        .collect();
    format!(" WHERE {}", conditions.join(" AND "))
}

fn bind_filter<'r>(mut query: Query<'r, Any>, filter: &Filter) -> Query<'r, Any> {
    for (i, (_, value)) in filter.clauses().iter().enumerate() {
        query = query.bind((format!("f{i}"), value.clone()));
    }
    query
}
