//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Dining table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "_id")]
    pub id: String,
    pub table_id: String,
    pub number_of_guests: i32,
    pub table_number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TableCreate {
    #[validate(required, range(min = 1))]
    pub number_of_guests: Option<i32>,
    #[validate(required, range(min = 1))]
    pub table_number: Option<i32>,
}

/// Update table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TableUpdate {
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i32>,
    #[validate(range(min = 1))]
    pub table_number: Option<i32>,
}
