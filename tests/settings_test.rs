//! Settings resolution integration tests.
//!
//! Exercises the full record against in-memory environments, plus the `.env`
//! file path. Only the env-file test touches the process environment.

use std::io::Write;
use std::path::PathBuf;

use trucksigns_settings::config::{DatabaseSettings, Env, MediaStorage, Settings};
use trucksigns_settings::errors::SettingsError;

fn debug_env(extra: &[(&str, &str)]) -> Env {
    let mut vars = vec![("DEBUG", "true")];
    vars.extend_from_slice(extra);
    Env::from_iter(vars)
}

#[test]
fn every_key_has_a_documented_default() {
    let settings = Settings::resolve(&debug_env(&[])).unwrap();

    assert_eq!(
        settings.allowed_hosts,
        vec!["91.99.193.112", "localhost", "127.0.0.1", "*"]
    );
    assert_eq!(
        settings.cors_allowed_origins,
        vec!["http://localhost:3000", "http://127.0.0.1:3000"]
    );
    assert_eq!(settings.base_dir, PathBuf::from("."));
    assert_eq!(settings.database.backend_name(), "sqlite");
    assert_eq!(settings.media.backend_name(), "local");
    assert_eq!(settings.static_files.static_url, "/static/");
    assert_eq!(settings.email.host, "smtp.gmail.com");
    assert_eq!(settings.email.port, 587);
    assert!(settings.email.use_tls);
    assert_eq!(settings.email.user, "");
    assert!(settings.email.password.is_empty());
    assert_eq!(settings.email.admin_domain, "http://localhost:8000");
    assert_eq!(settings.email.admin_email, "admin@trucksigns.com");
    assert_eq!(settings.stripe.publishable_key, "");
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn db_host_gates_between_sqlite_and_postgres() {
    let sqlite = Settings::resolve(&debug_env(&[])).unwrap();
    assert!(matches!(sqlite.database, DatabaseSettings::Sqlite { .. }));

    let postgres = Settings::resolve(&debug_env(&[
        ("DB_HOST", "10.0.0.5"),
        ("DB_NAME", "shopdb"),
        ("DB_USER", "shop"),
        ("DB_PASSWORD", "pw"),
        ("DB_PORT", "6432"),
    ]))
    .unwrap();

    assert_eq!(
        postgres.database.connection_url(),
        "postgres://shop:pw@10.0.0.5:6432/shopdb"
    );
}

#[test]
fn cloud_name_gates_between_local_and_cloudinary() {
    let local = Settings::resolve(&debug_env(&[])).unwrap();
    match local.media {
        MediaStorage::Local { media_url, .. } => assert_eq!(media_url, "/media/"),
        other => panic!("expected local media, got {other:?}"),
    }

    let cloud = Settings::resolve(&debug_env(&[
        ("CLOUD_NAME", "trucksigns"),
        ("CLOUD_API_KEY", "k"),
        ("CLOUD_API_SECRET", "s"),
    ]))
    .unwrap();
    match cloud.media {
        MediaStorage::Cloudinary { cloud_name, .. } => assert_eq!(cloud_name, "trucksigns"),
        other => panic!("expected cloudinary, got {other:?}"),
    }
}

#[test]
fn production_profile_is_hardened_and_demands_a_secret() {
    let prod = Settings::resolve(&Env::from_iter([("SECRET_KEY", "k")])).unwrap();
    assert!(!prod.debug);
    assert!(prod.security.is_some());

    let missing = Settings::resolve(&Env::from_iter::<&str, &str>([]));
    assert!(matches!(
        missing.unwrap_err(),
        SettingsError::MissingSecretKey
    ));

    let dev = Settings::resolve(&debug_env(&[])).unwrap();
    assert!(dev.security.is_none());
}

#[test]
fn overrides_replace_defaults() {
    let settings = Settings::resolve(&debug_env(&[
        ("ALLOWED_HOSTS", "shop.example.com,admin.example.com"),
        ("CORS_ALLOWED_ORIGINS", "https://shop.example.com"),
        ("EMAIL_HOST_USER", "mailer@example.com"),
        ("CURRENT_ADMIN_DOMAIN", "https://admin.example.com"),
        ("EMAIL_ADMIN", "ops@example.com"),
        ("STRIPE_PUBLISHABLE_KEY", "pk_test_123"),
        ("LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(
        settings.allowed_hosts,
        vec!["shop.example.com", "admin.example.com"]
    );
    assert_eq!(settings.cors_allowed_origins, vec!["https://shop.example.com"]);
    assert_eq!(settings.email.user, "mailer@example.com");
    assert_eq!(settings.email.admin_domain, "https://admin.example.com");
    assert_eq!(settings.email.admin_email, "ops@example.com");
    assert_eq!(settings.stripe.publishable_key, "pk_test_123");
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn env_file_feeds_resolution() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DEBUG=true").unwrap();
    writeln!(file, "ENVFILE_TEST_MARKER=loaded").unwrap();
    file.flush().unwrap();

    let settings = Settings::from_env_file(file.path()).unwrap();
    assert!(settings.debug);
    // dotenvy exported the file's variables into the process environment
    assert_eq!(std::env::var("ENVFILE_TEST_MARKER").unwrap(), "loaded");
}

#[test]
fn missing_env_file_is_reported() {
    let result = Settings::from_env_file(std::path::Path::new("/nonexistent/.env"));
    assert!(matches!(result.unwrap_err(), SettingsError::EnvFile(_)));
}
