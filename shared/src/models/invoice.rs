//! Invoice Model

use super::rules::{validate_payment_method, validate_payment_status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Invoices fall due thirty days after creation unless told otherwise
pub const DEFAULT_PAYMENT_TERM_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "PAID" => Some(Self::Paid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "CASH")]
    Cash,
    /// Method not decided yet
    #[serde(rename = "")]
    Unspecified,
}

impl PaymentMethod {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CARD" => Some(Self::Card),
            "CASH" => Some(Self::Cash),
            "" => Some(Self::Unspecified),
            _ => None,
        }
    }
}

/// Invoice issued for an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    pub invoice_id: String,
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub payment_due: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create invoice payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct InvoiceCreate {
    #[validate(required, length(min = 1))]
    pub order_id: Option<String>,
    #[validate(custom(function = "validate_payment_method"))]
    pub payment_method: Option<String>,
    #[validate(required, custom(function = "validate_payment_status"))]
    pub payment_status: Option<String>,
    pub payment_due: Option<DateTime<Utc>>,
}

/// Update invoice payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct InvoiceUpdate {
    #[validate(length(min = 1))]
    pub order_id: Option<String>,
    #[validate(custom(function = "validate_payment_method"))]
    pub payment_method: Option<String>,
    #[validate(custom(function = "validate_payment_status"))]
    pub payment_status: Option<String>,
    pub payment_due: Option<DateTime<Utc>>,
}
