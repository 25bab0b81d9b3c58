//! Data models
//!
//! Stored documents plus the create/update payloads accepted by the API.
//! Every document carries its store key as `_id` and the same value as
//! `<entity>_id`; the latter is what clients use.

pub mod food;
pub mod invoice;
pub mod menu;
pub mod note;
pub mod order;
pub mod order_item;
pub mod rules;
pub mod table;
pub mod user;

// Re-exports
pub use food::*;
pub use invoice::*;
pub use menu::*;
pub use note::*;
pub use order::*;
pub use order_item::*;
pub use table::*;
pub use user::*;
