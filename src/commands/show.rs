//! Show command - prints the resolved settings record.
//!
//! Secrets are redacted at the type level, so both renderings are safe to
//! paste into tickets or logs.

use crate::cli::{OutputFormat, ShowArgs};
use crate::config::{DatabaseSettings, MediaStorage, Settings};
use crate::errors::SettingsResult;

/// Execute the show command
pub fn execute(args: &ShowArgs, settings: &Settings) -> SettingsResult<()> {
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(settings)?),
        OutputFormat::Text => print!("{}", render_text(settings)),
    }
    Ok(())
}

fn render_text(settings: &Settings) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(format!("debug:                {}", settings.debug));
    line(format!(
        "allowed_hosts:        {}",
        settings.allowed_hosts.join(", ")
    ));
    line(format!(
        "cors_allowed_origins: {}",
        settings.cors_allowed_origins.join(", ")
    ));

    match &settings.database {
        DatabaseSettings::Sqlite { path } => {
            line(format!("database:             sqlite ({})", path.display()));
        }
        DatabaseSettings::Postgres {
            name,
            user,
            host,
            port,
            ..
        } => {
            line(format!(
                "database:             postgresql ({user}@{host}:{port}/{name})"
            ));
        }
    }

    match &settings.media {
        MediaStorage::Local {
            media_url,
            media_root,
        } => {
            line(format!(
                "media:                local ({media_url} -> {})",
                media_root.display()
            ));
        }
        MediaStorage::Cloudinary { cloud_name, .. } => {
            line(format!("media:                cloudinary ({cloud_name})"));
        }
    }

    line(format!(
        "static:               {} -> {}",
        settings.static_files.static_url,
        settings.static_files.static_root.display()
    ));
    line(format!(
        "email:                {}:{} tls={} user={:?}",
        settings.email.host, settings.email.port, settings.email.use_tls, settings.email.user
    ));
    line(format!(
        "admin:                {} <{}>",
        settings.email.admin_domain, settings.email.admin_email
    ));
    line(format!(
        "security_headers:     {}",
        if settings.security.is_some() {
            "hardened"
        } else {
            "off (debug)"
        }
    ));
    line(format!("log_level:            {}", settings.logging.level));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Env;

    #[test]
    fn text_rendering_never_leaks_secrets() {
        let env = Env::from_iter([
            ("SECRET_KEY", "prod-secret"),
            ("DB_HOST", "db.internal"),
            ("DB_PASSWORD", "db-pass"),
            ("EMAIL_HOST_PASSWORD", "mail-pass"),
        ]);
        let settings = Settings::resolve(&env).unwrap();

        let text = render_text(&settings);
        for secret in ["prod-secret", "db-pass", "mail-pass"] {
            assert!(!text.contains(secret), "leaked {secret}");
        }
        assert!(text.contains("postgresql"));
        assert!(text.contains("hardened"));
    }

    #[test]
    fn text_rendering_shows_debug_profile() {
        let env = Env::from_iter([("DEBUG", "true")]);
        let settings = Settings::resolve(&env).unwrap();

        let text = render_text(&settings);
        assert!(text.contains("sqlite"));
        assert!(text.contains("off (debug)"));
    }
}
