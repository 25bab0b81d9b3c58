//! Shared types for the restaurant backend
//!
//! Error model, domain documents with their request payloads, and
//! pagination types used by the server and its tests.

pub mod error;
pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use query::{PageQuery, PaginatedResponse};
