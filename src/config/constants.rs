//! Compiled-in configuration defaults
//!
//! Centralized location for every fallback value so the resolution code in
//! `settings.rs` stays free of magic literals.

// =============================================================================
// Hosts & CORS
// =============================================================================

/// Hosts the backend will answer for when ALLOWED_HOSTS is unset
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["91.99.193.112", "localhost", "127.0.0.1", "*"];

/// Origins allowed to make cross-site requests when CORS_ALLOWED_ORIGINS is unset
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL database name
pub const DEFAULT_DB_NAME: &str = "trucksigns_db";

/// Default PostgreSQL role
pub const DEFAULT_DB_USER: &str = "trucksigns_user";

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// SQLite database filename, relative to the base directory
pub const SQLITE_FILENAME: &str = "db.sqlite3";

// =============================================================================
// Static & media files
// =============================================================================

/// URL prefix for collected static files
pub const STATIC_URL: &str = "/static/";

/// URL prefix for locally stored media files
pub const MEDIA_URL: &str = "/media/";

/// Static root directory name, relative to the base directory
pub const STATIC_DIRNAME: &str = "static";

/// Media root directory name, relative to the base directory
pub const MEDIA_DIRNAME: &str = "media";

// =============================================================================
// Email transport
// =============================================================================

/// Fixed outbound SMTP relay
pub const EMAIL_HOST: &str = "smtp.gmail.com";

/// Fixed SMTP submission port (STARTTLS)
pub const EMAIL_PORT: u16 = 587;

/// Default admin-facing domain for links in outbound mail
pub const DEFAULT_ADMIN_DOMAIN: &str = "http://localhost:8000";

/// Default address that receives admin notifications
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@trucksigns.com";

// =============================================================================
// Security headers (production only)
// =============================================================================

/// HSTS max-age in seconds (one day)
pub const HSTS_SECONDS: u32 = 86_400;

/// X-Frame-Options value in production
pub const X_FRAME_OPTIONS: &str = "DENY";

// =============================================================================
// Misc
// =============================================================================

/// Base directory anchoring the sqlite file and media/static roots
pub const DEFAULT_BASE_DIR: &str = ".";

/// Log level handed to the tracing subscriber when LOG_LEVEL is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Placeholder secret key, usable only while DEBUG is true
pub const DEV_SECRET_KEY: &str = "insecure-dev-only-change-me";
