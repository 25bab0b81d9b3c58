//! Menu Model

use super::rules::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MIN_NAME_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu with an optional validity window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "_id")]
    pub id: String,
    pub menu_id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create menu payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    #[validate(required, length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(required, length(min = 1, max = MAX_SHORT_TEXT_LEN))]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Update menu payload
///
/// `start_date` and `end_date` travel together; see
/// `validate_menu_window` in the server crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[validate(length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN))]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
