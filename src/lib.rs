//! Truck Signs settings - environment-driven configuration resolution
//!
//! Resolves the backend's settings record exactly once at process start from
//! compiled-in defaults, an optional `.env` file, and process environment
//! variables. Two gating variables select configuration branches: DB_HOST
//! (SQLite vs PostgreSQL) and CLOUD_NAME (local vs Cloudinary media storage).
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations (`check`, `show`)
//! - **config**: Environment reader, settings record, and constants
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Validate the deployment environment
//! cargo run -- check
//!
//! # Dump the resolved record with secrets redacted
//! cargo run -- show --format json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{DatabaseSettings, Env, MediaStorage, Settings};
pub use errors::{SettingsError, SettingsResult};
