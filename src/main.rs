//! Truck Signs settings - application entry point
//!
//! CLI-based entry point that resolves the settings record and dispatches
//! to inspection commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trucksigns_settings::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
    errors::SettingsResult,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Resolve settings and execute command
    if let Err(e) = run(&cli) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> SettingsResult<()> {
    let settings = match &cli.env_file {
        Some(path) => Settings::from_env_file(path)?,
        None => Settings::from_env()?,
    };
    tracing::debug!("Settings resolved");

    match &cli.command {
        Commands::Check => commands::check::execute(&settings),
        Commands::Show(args) => commands::show::execute(args, &settings),
    }
}

/// Initialize tracing subscriber. RUST_LOG wins when set; LOG_LEVEL is the
/// deployment-facing knob carried in the settings record.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG")
            .or_else(|_| std::env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
