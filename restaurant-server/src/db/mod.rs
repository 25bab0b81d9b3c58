//! Persistence layer
//!
//! - [`store`]: the [`DocumentStore`] seam and its filter/patch types
//! - [`surreal`]: SurrealDB-backed implementation
//! - [`repository`]: typed [`Collection`] per entity

pub mod repository;
pub mod store;
pub mod surreal;

pub use repository::{Collection, Entity};
pub use store::{
    Document, DocumentStore, Filter, Page, Patch, StoreError, StoreResult, UpdateOutcome,
};
pub use surreal::SurrealStore;

use crate::core::Config;
use std::sync::Arc;

/// Open the store described by the configuration
pub async fn connect(config: &Config) -> StoreResult<Arc<dyn DocumentStore>> {
    let store = SurrealStore::connect(
        &config.store_url,
        &config.store_namespace,
        &config.database,
        config.store_timeout,
    )
    .await?;
    Ok(Arc::new(store))
}
