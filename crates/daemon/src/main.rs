//! Dashboard API - Backend Entry Point
//!
//! Serves the contract over REST and JSON-RPC until Ctrl+C.

mod config;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{loggable_env_vars, AppConfig, LogFormat};
use dashboard_api_http::{cors_layer, AppState, HttpServer, HttpServerConfig};
use dashboard_api_rpc::{RpcServer, RpcServerConfig};
use dashboard_core::api::TITLE;
use dashboard_core::application::{dashboard_dispatcher, describe};
use dashboard_core::port::{SystemTimeProvider, ThreadRandomSource};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (log level and format come from it)
    let config = AppConfig::load()?;

    // 2. Initialize logging
    init_logging(&config)?;

    info!("{} v{} starting...", TITLE, VERSION);
    info!(node_env = %config.node_env, debug = %config.debug, "Environment configuration");

    if config.is_development() {
        for (name, value) in loggable_env_vars(std::env::vars()) {
            info!(name = %name, value = %value, "Environment variable");
        }
    }

    // 3. Assemble contract and handlers (fails before anything binds)
    let dispatcher = Arc::new(
        dashboard_dispatcher(Arc::new(SystemTimeProvider), Arc::new(ThreadRandomSource))
            .context("Contract assembly failed")?,
    );
    let document = Arc::new(describe(dispatcher.registry(), TITLE, VERSION));
    let cors = cors_layer(&config.cors_origin).map_err(anyhow::Error::msg)?;

    info!(operations = dispatcher.registry().len(), "Contract registered");

    // 4. Start JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: config.backend_host.clone(),
        port: config.rpc_port,
        cors: cors.clone(),
    };
    let (rpc_addr, rpc_handle) = RpcServer::new(rpc_config, dispatcher.clone(), document.clone())
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    // 5. Start REST server
    let http_config = HttpServerConfig {
        host: config.backend_host.clone(),
        port: config.backend_port,
        cors,
    };
    let state = AppState {
        dispatcher,
        document,
    };
    let (http_addr, http_handle) = HttpServer::new(http_config, state)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server start failed: {}", e))?;

    info!(rest = %http_addr, rpc = %rpc_addr, "Backend ready");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    http_handle.stop().await;
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;

    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
