use crate::db::StoreError;
use thiserror::Error;

/// Startup and serve failures; these terminate the process
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
