//! Roster Server Library
//!
//! HTTP front end for the user store: request handling, routing, and configuration.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use handler::UserRequestHandler;
pub use state::AppState;
