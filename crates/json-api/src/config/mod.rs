//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    observability::LoggingConfig, packing::PackingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod observability;
pub(crate) mod packing;
pub(crate) mod server;

/// Packing JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "packing-json", about = "Packing JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Pack catalog and order limits.
    #[command(flatten)]
    pub packing: PackingConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
