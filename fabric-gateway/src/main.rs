//! Entry point for the `fabric-gateway` HTTP server.

use std::sync::Arc;

use clap::Parser;
use fabric_executor::FabricCli;
use fabric_gateway::{create_router, Gateway, GatewayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::parse();
    let addr = config.listen_addr();

    let runner = Arc::new(FabricCli::new(config.cli_config()));
    let gateway = Arc::new(Gateway::new(runner, &config.config_dir));
    let app = create_router(gateway);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %addr,
        fabric_bin = %config.fabric_bin.display(),
        config_dir = %config.config_dir.display(),
        "fabric-gateway listening"
    );

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("shutdown signal received");
    };

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
