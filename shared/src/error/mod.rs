//! Unified error system
//!
//! - [`ErrorCode`]: stable numeric codes for every failure
//! - [`ErrorCategory`]: classification by code range
//! - [`AppError`]: code, message and optional details
//! - [`ApiResponse`]: response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Account errors
//! - 3xxx: Menu errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::reference_not_found("menu");
//! assert_eq!(err.code, ErrorCode::ReferenceNotFound);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.message, "menu was not found");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
