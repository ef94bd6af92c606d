//! Usuarios service — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/usuarios-service/config.toml)
//! usuarios-service
//!
//! # Custom config path
//! usuarios-service --config /etc/usuarios-service/config.toml
//!
//! # Override the listen port
//! usuarios-service --port 8080
//!
//! # Validate config without starting
//! usuarios-service --check
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};

use usuarios::config::AppConfig;
use usuarios::domain::InfraError;
use usuarios::server::{init_tracing, ServerHandle, ServerOptions};

/// Usuarios service — REST CRUD API for usuarios.
#[derive(Parser, Debug)]
#[command(
    name = "usuarios-service",
    version,
    about = "REST API for managing usuarios",
    long_about = "Usuarios service — list, retrieve, create, update and delete \
                  usuarios over HTTP.\n\n\
                  Default config: ~/.config/usuarios-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "USUARIOS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

/// Read the config file and apply `--log-level`.
///
/// An unreadable file falls back to the defaults (the error is handed back
/// for logging once tracing is up), except under `--check`.
fn load_config(cli: &Cli, path: &Path) -> Result<(AppConfig, Option<InfraError>), InfraError> {
    let (mut config, load_error) = match AppConfig::load(path) {
        Ok(cfg) => (cfg, None),
        Err(e) if cli.check => return Err(e),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    Ok((config, load_error))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(usuarios::default_config_path);

    let (mut config, load_error) = load_config(&cli, &config_path)?;
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(host) = cli.host {
        info!("CLI override: host = {}", host);
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
