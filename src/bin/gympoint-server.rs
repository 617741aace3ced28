// ABOUTME: Server binary for the GymPoint registration API
// ABOUTME: Wires configuration, logging, the record store, and the HTTP router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! # GymPoint Registration API Server Binary
//!
//! Starts the registration API with database management and structured
//! logging.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use gympoint_server::{
    config::environment::ServerConfig,
    database_plugins::factory::Database,
    logging,
    notifications::LogNotifier,
    resources::ServerResources,
    routes::{HealthRoutes, RegistrationRoutes},
    services::SystemClock,
};

#[derive(Parser)]
#[command(name = "gympoint-server")]
#[command(about = "GymPoint Registration API - membership subscription lifecycle service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting GymPoint Registration API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let resources = Arc::new(ServerResources::new(
        config.clone(),
        Arc::new(database),
        Arc::new(LogNotifier),
        Arc::new(SystemClock),
    ));

    let app = Router::new()
        .merge(HealthRoutes::routes())
        .merge(RegistrationRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

/// Resolve when the process receives a termination signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
    info!("Shutdown signal received");
}
