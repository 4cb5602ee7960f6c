//! Listener Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Address the packing API listens on.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind, all interfaces by default
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
