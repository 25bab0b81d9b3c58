//! Authentication gate
//!
//! Protected routers are wrapped with [`require_auth`]; handlers receive the
//! caller through the [`CurrentUser`] extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use http::{HeaderMap, Uri};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Request header carrying the raw access token
pub const TOKEN_HEADER: &str = "token";

/// Validate the `token` header and resolve the caller
///
/// | Failure | Code |
/// |---------|------|
/// | header missing | 1001 NotAuthenticated |
/// | token expired | 1003 TokenExpired |
/// | bad signature, malformed, refresh token | 1004 TokenInvalid |
pub fn authenticate(
    jwt: &JwtService,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<CurrentUser, AppError> {
    let Some(token) = headers.get(TOKEN_HEADER).and_then(|h| h.to_str().ok()) else {
        security_log!("WARN", "auth_missing", uri = uri.to_string());
        return Err(AppError::not_authenticated());
    };

    match jwt.validate_access_token(token) {
        Ok(claims) => Ok(CurrentUser::from(claims)),
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                uri = uri.to_string()
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                other => Err(AppError::invalid_token(other.to_string())),
            }
        }
    }
}

/// Middleware for protected routers; injects [`CurrentUser`] into the
/// request extensions
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(state.jwt_service(), req.headers(), req.uri())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by require_auth
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = authenticate(state.jwt_service(), &parts.headers, &parts.uri)?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
