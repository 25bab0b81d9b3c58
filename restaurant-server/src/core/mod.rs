//! Core: configuration, shared state and the server loop
//!
//! - [`Config`] - environment configuration
//! - [`ServerState`] - services shared by handlers
//! - [`Server`] - HTTP listener
//! - [`ServerError`] - startup failures

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
