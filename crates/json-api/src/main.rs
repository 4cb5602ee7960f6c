//! Packing JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod packs;
mod router;
mod shutdown;
mod sizes;
mod state;
#[cfg(test)]
mod test_helpers;

/// Packing JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing subscriber failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!(
        sizes = %config.packing.pack_sizes,
        max_quantity = config.packing.max_quantity,
        "Starting server on {addr}"
    );

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::RequestLogger::new(
            config.logging.slow_request_threshold(),
        ))
        .hoop(inject(State::from_config(&config.packing)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let doc = OpenApi::new("Packing API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    info!("server stopped");
}
