//! Token service
//!
//! Issues and validates the HS256 access/refresh token pair handed out on
//! sign-up and login.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FALLBACK_SECRET: &str = "restaurant-development-secret-change-me";

pub const ACCESS_TOKEN: &str = "access";
pub const REFRESH_TOKEN: &str = "refresh";

/// Token configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
    /// True when `SECRET_KEY` was not set
    pub uses_fallback_secret: bool,
}

impl JwtConfig {
    /// Read `SECRET_KEY`; a fixed development secret is used when it is unset
    pub fn from_env() -> Self {
        match std::env::var("SECRET_KEY") {
            Ok(secret) if !secret.is_empty() => Self::with_secret(secret),
            _ => {
                tracing::warn!("SECRET_KEY not set, using the development secret");
                Self {
                    uses_fallback_secret: true,
                    ..Self::with_secret(FALLBACK_SECRET)
                }
            }
        }
    }

    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl: Duration::hours(24),
            refresh_ttl: Duration::hours(168),
            uses_fallback_secret: false,
        }
    }
}

/// Claims carried by both tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Domain id of the user
    pub uid: String,
    /// `access` or `refresh`
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

/// Identity the tokens are bound to
#[derive(Debug, Clone)]
pub struct TokenSubject<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub uid: &'a str,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("token invalid")]
    InvalidToken(String),

    #[error("token is expired")]
    ExpiredToken,

    #[error("token generation failed: {0}")]
    GenerationFailed(String),
}

/// Token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl", &self.config.access_ttl)
            .field("refresh_ttl", &self.config.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a fresh access/refresh pair for a user
    pub fn issue_tokens(&self, subject: &TokenSubject<'_>) -> Result<TokenPair, JwtError> {
        let now = Utc::now();
        let claims = |token_type: &str, ttl: Duration| Claims {
            email: subject.email.to_string(),
            first_name: subject.first_name.to_string(),
            last_name: subject.last_name.to_string(),
            uid: subject.uid.to_string(),
            token_type: token_type.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        Ok(TokenPair {
            token: self.sign(&claims(ACCESS_TOKEN, self.config.access_ttl))?,
            refresh_token: self.sign(&claims(REFRESH_TOKEN, self.config.refresh_ttl))?,
        })
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify signature and expiry (no leeway) and decode the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Like [`validate_token`](Self::validate_token), but refresh tokens are refused
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = self.validate_token(token)?;
        if claims.token_type != ACCESS_TOKEN {
            return Err(JwtError::InvalidToken(format!(
                "{} token used for authentication",
                claims.token_type
            )));
        }
        Ok(claims)
    }
}

/// Authenticated caller, handed to protected handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub uid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            uid: claims.uid,
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig::with_secret("test-secret-for-token-service"))
    }

    fn subject() -> TokenSubject<'static> {
        TokenSubject {
            email: "ada@example.com",
            first_name: "Ada",
            last_name: "Lovelace",
            uid: "0190f5a2c3d4",
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let service = service();
        let pair = service.issue_tokens(&subject()).unwrap();

        let claims = service.validate_token(&pair.token).unwrap();
        assert_eq!(claims.uid, "0190f5a2c3d4");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.token_type, ACCESS_TOKEN);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);

        let refresh = service.validate_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.token_type, REFRESH_TOKEN);
        assert_eq!(refresh.exp - refresh.iat, 168 * 3600);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let service = service();
        let pair = service.issue_tokens(&subject()).unwrap();

        assert!(service.validate_access_token(&pair.token).is_ok());
        assert!(matches!(
            service.validate_access_token(&pair.refresh_token),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let service = service();
        let now = Utc::now().timestamp();
        let token = service
            .sign(&Claims {
                email: "ada@example.com".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                uid: "u1".into(),
                token_type: ACCESS_TOKEN.into(),
                exp: now - 5,
                iat: now - 60,
            })
            .unwrap();

        let err = service.validate_token(&token).unwrap_err();
        assert!(matches!(err, JwtError::ExpiredToken));
        assert_eq!(err.to_string(), "token is expired");
    }

    #[test]
    fn test_wrong_secret_and_garbage() {
        let pair = service().issue_tokens(&subject()).unwrap();
        let other = JwtService::with_config(JwtConfig::with_secret("another-secret"));

        let err = other.validate_token(&pair.token).unwrap_err();
        assert_eq!(err.to_string(), "token invalid");
        assert!(service().validate_token("not.a.token").is_err());
    }

    #[test]
    fn test_current_user_from_claims() {
        let service = service();
        let pair = service.issue_tokens(&subject()).unwrap();
        let user = CurrentUser::from(service.validate_token(&pair.token).unwrap());
        assert_eq!(user.uid, "0190f5a2c3d4");
        assert_eq!(user.first_name, "Ada");
    }
}
