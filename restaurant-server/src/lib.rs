//! Restaurant management backend
//!
//! CRUD service for users, menus, foods, tables, orders, order items,
//! invoices and notes over HTTP/JSON, backed by a document store and
//! guarded by signed tokens.
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # password hashing, tokens, request gate
//! ├── db/            # document store seam, SurrealDB adapter, collections
//! ├── services/      # entity services, HTTP assembly
//! ├── api/           # routes and handlers
//! └── utils/         # logging, validation, JSON extractor
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::https::build_router;
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
