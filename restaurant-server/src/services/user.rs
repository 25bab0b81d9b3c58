//! Accounts: sign-up, login and read access to users

use super::{apply_update, find_or_not_found};
use crate::auth::{
    JwtService, TokenPair, TokenSubject, dummy_hash, hash_password, verify_password,
};
use crate::db::{Collection, DocumentStore, Filter, Patch};
use crate::security_log;
use crate::utils::{required, validate_payload};
use shared::models::{LoginRequest, SignUpRequest, User, UserResponse};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    users: Collection<User>,
    jwt: Arc<JwtService>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>, jwt: Arc<JwtService>) -> Self {
        Self {
            users: Collection::new(store),
            jwt,
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<UserResponse>> {
        Ok(self.users.list(query).await?.map(UserResponse::public))
    }

    pub async fn get(&self, user_id: &str) -> AppResult<UserResponse> {
        find_or_not_found(&self.users, user_id)
            .await
            .map(UserResponse::public)
    }

    /// Register a new account and return it with a fresh token pair.
    /// Email and phone number must both be unused.
    pub async fn sign_up(&self, payload: SignUpRequest) -> AppResult<UserResponse> {
        validate_payload(&payload)?;

        let email = required(payload.email, "email")?;
        let phone = required(payload.phone, "phone")?;

        if self.users.find_one(&Filter::eq("email", email.as_str())).await?.is_some() {
            return Err(AppError::new(ErrorCode::EmailAlreadyExists));
        }
        if self.users.find_one(&Filter::eq("phone", phone.as_str())).await?.is_some() {
            return Err(AppError::new(ErrorCode::PhoneAlreadyExists));
        }

        let password = required(payload.password, "password")?;
        let password = hash_password(&password).map_err(|e| AppError::internal(e.to_string()))?;

        let id = new_object_id();
        let first_name = required(payload.first_name, "first_name")?;
        let last_name = required(payload.last_name, "last_name")?;
        let tokens = self.issue(&email, &first_name, &last_name, &id)?;

        let now = now();
        let user = User {
            id: id.clone(),
            user_id: id,
            first_name,
            last_name,
            email,
            phone,
            password,
            avatar: payload.avatar,
            token: Some(tokens.token),
            refresh_token: Some(tokens.refresh_token),
            created_at: now,
            updated_at: now,
        };
        self.users.insert(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed up");
        Ok(UserResponse::from(user))
    }

    /// Check credentials and rotate the stored token pair. Unknown email
    /// and wrong password fail identically, after the same argon2 check.
    pub async fn login(&self, payload: LoginRequest) -> AppResult<UserResponse> {
        validate_payload(&payload)?;

        let user = self
            .users
            .find_one(&Filter::eq("email", payload.email.as_str()))
            .await?;

        let digest = user.as_ref().map_or(dummy_hash(), |u| u.password.as_str());
        let verified = verify_password(&payload.password, digest);

        let user = match user {
            Some(user) if verified => user,
            _ => {
                security_log!("WARN", "login_failed", email = payload.email.as_str());
                return Err(AppError::invalid_credentials());
            }
        };

        let tokens = self.issue(&user.email, &user.first_name, &user.last_name, &user.user_id)?;

        let mut patch = Patch::new();
        patch
            .set("token", tokens.token)?
            .set("refresh_token", tokens.refresh_token)?;
        let user = apply_update(&self.users, &user.user_id, patch).await?;

        security_log!("INFO", "login_success", uid = user.user_id.as_str());
        Ok(UserResponse::from(user))
    }

    fn issue(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        uid: &str,
    ) -> AppResult<TokenPair> {
        self.jwt
            .issue_tokens(&TokenSubject {
                email,
                first_name,
                last_name,
                uid,
            })
            .map_err(|e| AppError::internal(e.to_string()))
    }
}
