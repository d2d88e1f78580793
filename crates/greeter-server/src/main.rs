#![doc = include_str!("../README.md")]

use anyhow::Context;
use clap::Parser;
use greeter_core::types::Variant;
use greeter_server::server::{
    config::{CliArgs, ServerConfig},
    serve::{bind_listener, run_server_with_incoming},
    telemetry::init_telemetry,
};
use tokio_stream::wrappers::TcpListenerStream;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;
    let config = ServerConfig::from(args);

    let tcp = bind_listener(&config.listen_addr)
        .await
        .with_context(|| format!("failed to listen on {}", config.listen_addr))?;
    log_startup_info(&config);

    run_server_with_incoming(TcpListenerStream::new(tcp), config).await?;

    Ok(())
}

fn log_startup_info(config: &ServerConfig) {
    match config.variant {
        Variant::Block => tracing::info!(
            "using block server (max block duration {:?})",
            config.max_block_duration
        ),
        Variant::Default => tracing::info!("using default server"),
    }

    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting greeter service on {} with full config: {:#?}",
            config.listen_addr,
            config
        );
    } else {
        tracing::info!("Starting greeter service on {}", config.listen_addr);
    }
}
