pub mod auth;
pub mod connection;

pub use connection::Database;
