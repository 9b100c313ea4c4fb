//! Login Service
//!
//! Command-line entry point. Loads the configuration, builds the in-memory
//! user store from it and performs a single authentication.
//!
//! # Flow
//! 1. Parse arguments and load configuration
//! 2. Initialize logging
//! 3. Build the user store and authenticator
//! 4. Print the display name (exit 0) or a failure message (exit 1)
//!
//! @author Joseph G Noonan
//! @copyright 2025

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use login_app::auth::{Authenticator, Credentials};
use login_app::config::{Config, LogFormat, LoggingConfig};
use login_app::db::memory::InMemoryUserStore;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Authenticate a user by email and password
#[derive(Parser, Debug)]
#[command(name = "login_app")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults to config/application.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Email address to log in with
    #[arg(short, long)]
    email: String,

    /// Password to log in with
    #[arg(short, long, env = "APP_LOGIN_PASSWORD", hide_env_values = true)]
    password: String,
}

/// Initializes the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn setup_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log level: {}", logging.level))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    setup_logging(&config.logging)?;
    info!(application = %config.application.name, "Configuration loaded");

    if config.users.is_empty() {
        warn!("No users configured; every login will fail");
    }

    let store = InMemoryUserStore::from_records(config.users.clone());
    let authenticator = Authenticator::from_config(Arc::new(store), config.auth());

    let credentials = Credentials::new(cli.email, cli.password);
    match authenticator.authenticate_credentials(&credentials).await {
        Some(display_name) => {
            println!("{display_name}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("authentication failed");
            Ok(ExitCode::FAILURE)
        }
    }
}
