//! anime-api server binary.
//!
//! Loads configuration, builds the immutable route table and the lazy handler
//! registry, then serves the dispatch engine over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anime_api::config::{load_config, ApiConfig};
use anime_api::dispatch::{Dispatcher, HandlerRegistry};
use anime_api::handlers::Upstream;
use anime_api::http::HttpServer;
use anime_api::routing::RouteTable;

#[derive(Parser)]
#[command(name = "anime-api")]
#[command(about = "Stateless JSON API for anime content", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ApiConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "anime_api={},tower_http=warn",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "anime-api starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        categories = config.routes.categories.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Wire the dispatch engine: immutable table, lazy registry.
    let upstream = Arc::new(Upstream::new(&config.upstream)?);
    let table = RouteTable::new(config.routes.categories.clone());
    let registry = HandlerRegistry::standard(upstream);
    let dispatcher = Arc::new(Dispatcher::new(table, registry));

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(&config, dispatcher);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
