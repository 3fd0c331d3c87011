//! moodmap-api - MoodMap REST backend
//!
//! Serves mood logging, user preferences and place recommendations for
//! the MoodMap frontend. Configuration comes from command-line flags,
//! environment variables and an optional TOML file, in that priority.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use moodmap_api::{build_router, geocoder, AppState};
use moodmap_common::config::{load_or_default, resolve_config_path};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for moodmap-api
#[derive(Parser, Debug)]
#[command(name = "moodmap-api")]
#[command(about = "MoodMap REST backend")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Interface to bind to (overrides the config file)
    #[arg(short, long, env = "MOODMAP_BIND")]
    bind: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, env = "MOODMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Never call the external geocoding providers
    #[arg(long)]
    no_geocoding: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let mut config = load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "moodmap_api={lvl},moodmap_common={lvl},tower_http={lvl}",
                    lvl = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting MoodMap API (moodmap-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config_path {
        Some(path) if path.exists() => info!("Configuration loaded from {}", path.display()),
        Some(path) => warn!(
            "Config file {} not found, using compiled defaults",
            path.display()
        ),
        None => info!("No config file found, using compiled defaults"),
    }

    // Command-line flags override the file
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if args.no_geocoding {
        config.geocoding.enabled = false;
    }
    config.validate().context("Invalid configuration")?;

    let geocoder = geocoder::from_config(&config.geocoding)
        .context("Failed to initialize geocoding client")?;
    if config.geocoding.enabled {
        info!(
            "Geocoding enabled: primary {}, fallback {}",
            config.geocoding.primary_url, config.geocoding.fallback_url
        );
    } else {
        info!("Geocoding disabled");
    }

    let state = AppState::new(geocoder);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((config.bind_address.as_str(), config.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind to {}:{}",
                config.bind_address, config.port
            )
        })?;
    info!(
        "moodmap-api listening on http://{}",
        listener.local_addr().context("Failed to read bound address")?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
