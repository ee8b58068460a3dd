//! # imperihomed: ImperiHome bridge daemon
//!
//! Composition root that wires the device directory to the HTTP adapter and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Construct the device directory (virtual demo devices, or none)
//! - Construct the room registry and the bridge service
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use imperihome_adapter_http_axum::state::AppState;
use imperihome_adapter_virtual::VirtualDirectory;
use imperihome_app::room_registry::RoomRegistry;
use imperihome_app::services::bridge_service::BridgeService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let directory = if config.integrations.virtual_enabled {
        VirtualDirectory::default()
    } else {
        tracing::warn!("virtual integration disabled, no device will be served");
        VirtualDirectory::empty()
    };
    tracing::info!(devices = directory.len(), "device directory ready");

    let rooms = Arc::new(RoomRegistry::new());
    let bridge = BridgeService::new(directory, rooms);
    let app = imperihome_adapter_http_axum::router::build(AppState::new(bridge));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "imperihomed listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("imperihomed stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
