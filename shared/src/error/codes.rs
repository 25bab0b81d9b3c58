//! Error codes for the restaurant backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Account errors
//! - 3xxx: Menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Codes travel as plain u16 values in every error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Malformed request body or query
    InvalidRequest = 5,
    /// A referenced entity does not exist
    ReferenceNotFound = 6,

    // ==================== 1xxx: Auth ====================
    /// No token supplied
    NotAuthenticated = 1001,
    /// Wrong email or password
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Account ====================
    /// Email is already registered
    EmailAlreadyExists = 2001,
    /// Phone number is already registered
    PhoneAlreadyExists = 2002,

    // ==================== 3xxx: Menu ====================
    /// Menu validity window does not include the current time
    MenuPeriodInvalid = 3001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Store failure
    DatabaseError = 9002,
    /// Store operation timed out
    TimeoutError = 9003,
}

impl ErrorCode {
    /// Get the numeric value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::ReferenceNotFound => "Referenced resource was not found",

            ErrorCode::NotAuthenticated => "no authorization header provided",
            ErrorCode::InvalidCredentials => "login or password is incorrect",
            ErrorCode::TokenExpired => "token is expired",
            ErrorCode::TokenInvalid => "token invalid",

            ErrorCode::EmailAlreadyExists => "email already exists",
            ErrorCode::PhoneAlreadyExists => "phone number already exists",

            ErrorCode::MenuPeriodInvalid => "please retype the time",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an unknown u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::ReferenceNotFound),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            2001 => Ok(ErrorCode::EmailAlreadyExists),
            2002 => Ok(ErrorCode::PhoneAlreadyExists),

            3001 => Ok(ErrorCode::MenuPeriodInvalid),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
