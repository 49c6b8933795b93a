use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use proglog::{CliArgs, LogServer, ServerConfig};
use proglog_kernel::log::Log;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();
    let config = ServerConfig::from(&args);

    // One log per process; it is dropped when the server exits.
    let log: Arc<Log> = Arc::new(Log::default());

    LogServer::new(log, config).run().await?;

    Ok(())
}
