pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod types;

/// Display title of the application, reported in the startup banner.
pub const APP_TITLE: &str = "ABC Moliya Dinamikasi";

// Re-exports for convenience
pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
