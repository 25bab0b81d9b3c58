//! Food Model

use super::rules::{MAX_NAME_LEN, MAX_URL_LEN, MIN_NAME_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A dish offered on a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: String,
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub food_image: String,
    /// Domain id of the owning menu
    pub menu_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodCreate {
    #[validate(required, length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(required, range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(required, length(min = 1, max = MAX_URL_LEN))]
    pub food_image: Option<String>,
    #[validate(required, length(min = 1))]
    pub menu_id: Option<String>,
}

/// Update food payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodUpdate {
    #[validate(length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(min = 1, max = MAX_URL_LEN))]
    pub food_image: Option<String>,
    #[validate(length(min = 1))]
    pub menu_id: Option<String>,
}
