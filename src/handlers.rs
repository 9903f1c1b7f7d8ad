// Module declarations for HTTP handlers
pub mod analytics;
pub mod auth;
pub mod health;
pub mod upload;

// Re-exports
pub use health::health_handler;
