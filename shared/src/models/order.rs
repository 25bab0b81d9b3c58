//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order placed at an (optional) table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order payload; `order_date` defaults to now
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    pub table_id: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderUpdate {
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    pub table_id: Option<String>,
}
