//! Field limits and custom field validators used by the payload derives

use validator::ValidationError;

/// Person and menu/food names
pub const MIN_NAME_LEN: u64 = 2;
pub const MAX_NAME_LEN: u64 = 100;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: u64 = 6;
pub const MAX_PASSWORD_LEN: u64 = 128;

/// URLs / image paths
pub const MAX_URL_LEN: u64 = 2048;

/// Note bodies
pub const MAX_NOTE_LEN: u64 = 5000;

/// Short identifiers: phone, category, title
pub const MAX_SHORT_TEXT_LEN: u64 = 200;

/// Order items hold between one and five portions
pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 5;

pub fn validate_payment_status(value: &str) -> Result<(), ValidationError> {
    match super::PaymentStatus::parse(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("payment_status")
            .with_message("payment_status must be PENDING or PAID".into())),
    }
}

pub fn validate_payment_method(value: &str) -> Result<(), ValidationError> {
    match super::PaymentMethod::parse(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("payment_method")
            .with_message("payment_method must be CARD, CASH or empty".into())),
    }
}
