//! User Model

use super::rules::{MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, MIN_NAME_LEN, MIN_PASSWORD_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored user document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 PHC string, never the plaintext
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User as returned by the API (no password digest)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    /// Read-only view: drops the stored session tokens as well
    pub fn public(user: User) -> Self {
        Self {
            token: None,
            refresh_token: None,
            ..Self::from(user)
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            avatar: user.avatar,
            token: user.token,
            refresh_token: user.refresh_token,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Sign-up payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(required, length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub first_name: Option<String>,
    #[validate(required, length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub last_name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = MIN_PASSWORD_LEN, max = MAX_PASSWORD_LEN))]
    pub password: Option<String>,
    #[validate(required, length(min = 1, max = MAX_SHORT_TEXT_LEN))]
    pub phone: Option<String>,
    #[validate(length(max = MAX_URL_LEN))]
    pub avatar: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
