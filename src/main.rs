//! Huddle API Server
//!
//! Run with: cargo run -- [--config <path>] [--host <host>] [--port <port>] [--seed]
//!
//! # Configuration
//!
//! Environment variables:
//! - `HUDDLE_DB_PATH`: SQLite database file (default: platform data dir)
//! - `HUDDLE_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HUDDLE_API_PORT`: Port to listen on (default: 8083)
//! - `HUDDLE_LOG_LEVEL`: Log level (default: info)
//! - `HUDDLE_LOG_FORMAT`: Log format, pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use clap::Parser;
use huddle::api::{serve, ApiConfig, AppState};
use huddle::config::Config;
use huddle::store::{NewChannel, NewServer, Store, StoreResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Community chat backend
#[derive(Parser, Debug)]
#[command(name = "huddle", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API host
    #[arg(long)]
    host: Option<String>,

    /// Override the API port
    #[arg(long)]
    port: Option<u16>,

    /// Populate demo data when the store is empty
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }

    // Initialize tracing
    init_tracing(&config.logging);

    tracing::info!("Starting Huddle API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", config.database.path);

    // Open the store
    let store = Arc::new(Store::open(Path::new(&config.database.path))?);

    if cli.seed {
        seed_demo_data(&store)?;
    }

    let stats = store.stats()?;
    tracing::info!("Store: {}", stats);

    // Run server
    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        cors_origins: config.api.cors_origins.clone(),
    };
    let state = AppState::new(Arc::clone(&store), api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Huddle API server stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config
fn init_tracing(logging: &huddle::config::LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("huddle={},tower_http=info", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Populate demo categories, users, servers, and channels
///
/// Skipped when the store already holds servers.
fn seed_demo_data(store: &Store) -> StoreResult<()> {
    if store.stats()?.servers > 0 {
        tracing::info!("Store already populated, skipping seed");
        return Ok(());
    }

    tracing::info!("Seeding demo data...");

    let ada = store.create_user("ada")?;
    let grace = store.create_user("grace")?;
    let linus = store.create_user("linus")?;

    let gaming = store.create_category("gaming", Some("Games of every genre"))?;
    let music = store.create_category("music", Some("Listening and making"))?;
    let tech = store.create_category("tech", Some("Programming and hardware"))?;

    let quake = store.create_server(
        NewServer::new("quake-fans", ada, gaming).description("Strafe jumping and rocket duels"),
    )?;
    store.create_channel(NewChannel::new("general", ada, "Anything goes", quake))?;
    store.create_channel(NewChannel::new("duels", ada, "1v1 matchmaking", quake))?;
    store.add_member(quake, grace)?;

    let jazz = store.create_server(
        NewServer::new("jazz-lounge", grace, music).description("Standards and improvisation"),
    )?;
    store.create_channel(NewChannel::new("listening-club", grace, "Weekly album pick", jazz))?;

    let rust = store.create_server(
        NewServer::new("rustaceans", linus, tech).description("All things Rust"),
    )?;
    store.create_channel(NewChannel::new("beginners", linus, "No question too small", rust))?;
    store.create_channel(NewChannel::new("showcase", linus, "Show off your crates", rust))?;
    store.add_member(rust, ada)?;
    store.add_member(rust, grace)?;

    tracing::info!("Demo data seeded");
    Ok(())
}
