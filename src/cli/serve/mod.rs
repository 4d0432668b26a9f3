//! Serve command - runs the translation form UI

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::api::{AppState, create_router};
use crate::config::{AppConfig, ProviderConfig};
use crate::domain::ProviderKind;
use crate::infrastructure::llm::ConfigProviderResolver;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Overrides `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Directory holding index.html; overrides `ui.dir`
    #[arg(long)]
    pub ui_dir: Option<PathBuf>,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let provider_config = ProviderConfig::from_env()?;
    log_configured_providers(&provider_config);

    let state = AppState::new(Arc::new(ConfigProviderResolver::new(Arc::new(
        provider_config,
    ))));

    let ui_dir = args
        .ui_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.ui.dir));
    if !ui_dir.join("index.html").is_file() {
        warn!(ui_dir = %ui_dir.display(), "index.html not found, the form will not load");
    }

    let app = create_router(state, &ui_dir);

    let addr = build_socket_addr(&config, &args)?;
    info!("Starting translation UI on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn build_socket_addr(config: &AppConfig, args: &ServeArgs) -> anyhow::Result<SocketAddr> {
    let host = args.host.as_deref().unwrap_or(&config.server.host);
    let port = args.port.unwrap_or(config.server.port);

    Ok(SocketAddr::from((host.parse::<IpAddr>()?, port)))
}

fn log_configured_providers(config: &ProviderConfig) {
    for kind in ProviderKind::ALL {
        if !kind.requires_api_key() {
            continue;
        }

        if config.api_key(kind).is_some() {
            info!(provider = %kind, "Provider API key configured");
        } else {
            warn!(provider = %kind, "No API key configured, models of this provider will fail");
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
