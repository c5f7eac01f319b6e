//! # Huddle
//!
//! Community chat backend - a full-stack Rust application for managing
//! chat servers, their categories, and their channels behind a REST API.
//!
//! ## Modules
//!
//! - [`store`]: SQLite-backed relational store
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use huddle::store::{NewChannel, NewServer, ServerFilter, Store};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Store::open(std::path::Path::new("huddle.db"))?;
//!
//!     // Register a user and a category
//!     let owner = store.create_user("ada")?;
//!     let category = store.create_category("gaming", Some("Games and such"))?;
//!
//!     // Create a server with a channel
//!     let server = store.create_server(
//!         NewServer::new("quake-fans", owner, category).description("Strafe jumping"),
//!     )?;
//!     store.create_channel(NewChannel::new("general", owner, "Anything goes", server))?;
//!
//!     // List servers in a category
//!     let servers = store.list_servers(&ServerFilter::default().category("gaming"))?;
//!     println!("Found {} servers", servers.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    Category, Channel, NewChannel, NewServer, Server, ServerFilter, Store, StoreError,
    StoreResult, StoreStats, User,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, ApiConfig as ConfigApiConfig, DatabaseConfig, LoggingConfig,
};
