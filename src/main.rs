//! User Gateway
//!
//! Serves the front page and proxies `/api/users` to the backend API.
//!
//! ```text
//!     Client ──▶ user-gateway ──▶ {API_URL}/users ──▶ Backend API
//!            ◀── status + JSON ◀──                ◀──
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use user_gateway::config::{resolve_config, CONFIG_PATH_ENV};
use user_gateway::lifecycle::{shutdown_signal, Shutdown};
use user_gateway::observability::init_logging;
use user_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "user-gateway")]
#[command(about = "Web front-end proxying user CRUD calls to a backend API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match resolve_config(args.config.as_deref(), |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability.log_level);
    tracing::info!("user-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_url = %config.backend.api_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
