//! Application configuration module
//!
//! Handles environment variables and compiled-in defaults.

pub mod constants;
mod env;
mod settings;

pub use env::Env;
pub use settings::{
    DatabaseSettings, EmailSettings, LoggingSettings, MediaStorage, Secret, SecurityHeaders,
    Settings, StaticFiles, StripeSettings,
};
