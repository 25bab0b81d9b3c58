//! Entity services
//!
//! One service per entity. Every service follows the same protocol:
//! validate the payload, resolve referenced entities, then write.
//! Updates only stage the fields that were supplied.

pub mod food;
pub mod https;
pub mod invoice;
pub mod menu;
pub mod note;
pub mod order;
pub mod order_item;
pub mod table;
pub mod user;

pub use food::FoodService;
pub use invoice::InvoiceService;
pub use menu::MenuService;
pub use note::NoteService;
pub use order::OrderService;
pub use order_item::OrderItemService;
pub use table::TableService;
pub use user::UserService;

use crate::db::{Collection, Entity};
use shared::{AppError, AppResult};

/// Fetch an entity addressed by the request path; unknown ids are a 404
pub(crate) async fn find_or_not_found<T: Entity>(
    collection: &Collection<T>,
    id: &str,
) -> AppResult<T> {
    collection
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(T::RESOURCE))
}

/// Resolve an entity referenced from a payload; unknown ids are a 422
pub(crate) async fn resolve_reference<T: Entity>(
    collection: &Collection<T>,
    id: &str,
) -> AppResult<T> {
    collection
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::reference_not_found(T::RESOURCE))
}

/// Apply a staged patch; unknown ids are a 404 and nothing is created
pub(crate) async fn apply_update<T: Entity>(
    collection: &Collection<T>,
    id: &str,
    patch: crate::db::Patch,
) -> AppResult<T> {
    collection
        .update_by_id(id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(T::RESOURCE))
}
