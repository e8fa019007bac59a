//! FindEasy API server.
//!
//! Serves the public catalog/deals/redirect surface, the checkout flow,
//! payment webhook stubs, and the token-guarded admin surface on one port.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - One flat JSON document as the whole persistent state, serialized
//!   through `JsonStore`
//! - Nondeterminism (ids, clock, mock prices) behind the `Generator` port

#![cfg_attr(not(test), forbid(unsafe_code))]

use findeasy_server::config::ServerConfig;
use findeasy_server::state::AppState;
use findeasy_server::store::JsonStore;
use findeasy_server::{middleware, routes};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "findeasy_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Open the document store; the file is created on first mutation
    let store = JsonStore::open(config.db_path.clone());
    tracing::info!(path = %config.db_path.display(), "document store opened");

    let cors = middleware::cors_layer(&config.allowed_origins);
    let addr = config.socket_addr();

    // Build application state and router
    let state = AppState::new(config, store);
    let app = routes::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("findeasy-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
