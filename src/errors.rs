// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, backend API).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// Sign-in failure carrying the user-readable message. Raw transport
    /// errors never reach this variant; see auth::google.
    Auth(String),
    DbError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Auth(msg) => write!(f, "Sign-in failed: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
