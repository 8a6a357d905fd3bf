//! Check command - resolves settings and reports the selected profile.

use crate::config::Settings;
use crate::errors::SettingsResult;

/// Execute the check command
pub fn execute(settings: &Settings) -> SettingsResult<()> {
    tracing::info!(
        debug = settings.debug,
        database = settings.database.backend_name(),
        media = settings.media.backend_name(),
        hardened = settings.security.is_some(),
        "Settings resolved"
    );

    if settings.debug {
        tracing::warn!("DEBUG is enabled; production security headers are off");
    }

    println!("configuration ok");
    println!("  database: {}", settings.database.backend_name());
    println!("  media:    {}", settings.media.backend_name());
    println!(
        "  profile:  {}",
        if settings.debug { "debug" } else { "production" }
    );

    Ok(())
}
