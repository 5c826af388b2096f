//! catalogd Server Binary
//!
//! Starts the TCP server for catalogd.

use std::sync::Arc;

use catalogd::network::Server;
use catalogd::{Config, Dispatcher};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// catalogd Server
#[derive(Parser, Debug)]
#[command(name = "catalogd-server")]
#[command(about = "Category server speaking a JSON-framed protocol over TCP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    listen: String,

    /// Worker threads handling connections
    #[arg(short, long, default_value = "8")]
    workers: usize,

    /// Maximum queued connections waiting for a worker
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,

    /// Read timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "0")]
    read_timeout_ms: u64,

    /// Size of each socket read; a shorter read ends the request
    #[arg(short, long, default_value = "2048")]
    buffer_size: usize,

    /// Start with an empty store instead of the default categories
    #[arg(long)]
    no_seed: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalogd=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("catalogd Server v{}", catalogd::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .worker_threads(args.workers)
        .max_connections(args.max_connections)
        .read_timeout_ms(args.read_timeout_ms)
        .frame_buffer_size(args.buffer_size)
        .seed_categories(!args.no_seed)
        .build();

    let dispatcher = Arc::new(Dispatcher::from_config(&config));
    tracing::info!("Store initialized with {} categories", dispatcher.store().list().len());

    let server = match Server::bind(config, dispatcher) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
