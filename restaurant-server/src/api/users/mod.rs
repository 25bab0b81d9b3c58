//! User API
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /users/signup | POST | none |
//! | /users/login | POST | none |
//! | /users/{user_id} | GET | none |
//! | /users | GET | token |
//! | /users/logout | POST | token |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn public_router() -> Router<ServerState> {
    Router::new()
        .route("/users/signup", post(handler::sign_up))
        .route("/users/login", post(handler::login))
        .route("/users/{user_id}", get(handler::get_by_id))
}

pub fn protected_router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list))
        .route("/users/logout", post(handler::logout))
}
