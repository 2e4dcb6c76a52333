//! Session state, configuration and theme handling for taskio.

/// Configuration file loading and persistence.
pub mod config;
/// Session façade over the task client.
pub mod session;
/// Color scheme preference.
pub mod theme;

pub use config::{API_URL_ENV, AppConfig};
pub use session::Session;
pub use theme::Theme;
