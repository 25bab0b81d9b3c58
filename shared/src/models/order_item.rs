//! Order Item Model

use super::rules::{MAX_QUANTITY, MIN_QUANTITY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One food line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_item_id: String,
    pub order_id: String,
    pub food_id: String,
    pub quantity: i32,
    /// Price per portion; copied from the food when not supplied
    pub unit_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    #[validate(required, range(min = MIN_QUANTITY, max = MAX_QUANTITY))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,
    #[validate(required, length(min = 1))]
    pub food_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub order_id: Option<String>,
}

/// Update order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemUpdate {
    #[validate(range(min = MIN_QUANTITY, max = MAX_QUANTITY))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,
    #[validate(length(min = 1))]
    pub food_id: Option<String>,
    #[validate(length(min = 1))]
    pub order_id: Option<String>,
}
