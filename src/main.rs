//! HTTP Endpoint Monitoring Daemon
//!
//! Probes a configured set of HTTP endpoints on a shared cadence, emails an
//! alert after repeated consecutive failures, and serves a live HTML status
//! dashboard.
//!
//! # Architecture Overview
//!
//! ```text
//!              ┌───────────────────────────────────────────────┐
//!              │               ENDPOINT MONITOR                 │
//!              │                                                │
//!              │  ┌───────────┐   probe    ┌────────────┐       │   GET
//!              │  │ scheduler │───────────▶│  targets   │       │◀─────── Browser
//!              │  │ tick loop │            └────────────┘       │
//!              │  └─────┬─────┘                                 │
//!              │        │ update                 snapshot       │
//!              │        ▼                            ▲          │
//!              │  ┌───────────┐                ┌─────┴─────┐    │
//!              │  │ StateStore│───────────────▶│ dashboard │    │
//!              │  └───────────┘                └───────────┘    │
//!              │        │ threshold crossed                     │
//!              │        ▼                                       │
//!              │  ┌───────────┐   SMTP (STARTTLS)               │
//!              │  │ notifier  │────────────────────▶ mail relay │
//!              │  └───────────┘                                 │
//!              └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use endpoint_monitor::config::load_config;
use endpoint_monitor::dashboard;
use endpoint_monitor::lifecycle::{shutdown_signal, Shutdown};
use endpoint_monitor::monitor::{Scheduler, StateStore};
use endpoint_monitor::notify::{EmailNotifier, Notifier, NullNotifier};

#[derive(Parser)]
#[command(name = "endpoint-monitor", about = "HTTP endpoint monitoring daemon")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "monitor.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "endpoint_monitor=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!("endpoint-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    // Config load is fatal on error; never monitor with undefined state.
    let config = load_config(&cli.config)?;

    tracing::info!(
        config_path = %cli.config.display(),
        endpoints = config.endpoints.len(),
        bind_address = %config.listener.bind_address,
        email_alerts = config.email.is_some(),
        "Configuration loaded"
    );

    let notifier: Arc<dyn Notifier> = match &config.email {
        Some(email) => Arc::new(EmailNotifier::new(email)?),
        None => {
            tracing::info!("No [email] section configured, alerts disabled");
            Arc::new(NullNotifier)
        }
    };

    let store = Arc::new(StateStore::new(&config.endpoints));
    let shutdown = Shutdown::new();

    // Background scheduler task
    let scheduler = Scheduler::new(config.endpoints.clone(), store.clone(), notifier);
    let scheduler_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        scheduler.run(scheduler_shutdown).await;
    });

    let mut server_shutdown = shutdown.subscribe();

    // Signal handler triggers the broadcast consumed by all tasks
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    // Dashboard listener starts last
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Dashboard listening");

    axum::serve(listener, dashboard::router(store))
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.recv().await;
        })
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
