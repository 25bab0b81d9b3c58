//! Authentication: password hashing, token service and the request gate

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, TokenPair, TokenSubject};
pub use middleware::{TOKEN_HEADER, authenticate, require_auth};
pub use password::{PasswordError, dummy_hash, hash_password, verify_password};
