//! # Server Module
//!
//! HTTP server setup and route configuration for the ping server.

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::database::connection::DatabaseConnection;
use crate::database::migrations;
use crate::routes::{health, ping};

/// Application state shared across all route handlers.
///
/// Holds the single process-wide handle to the database pool. It is
/// initialized once at startup and cloned into each handler via axum's
/// `State` extractor; no handler reaches for globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

/// Starts the ping HTTP server.
///
/// This function initializes and starts the web server with all configured
/// routes. Configuration is read from the environment, the database pool is
/// established (and the schema bootstrapped) before the listener binds, and
/// the server then serves requests until the process is terminated.
pub async fn start() {
    let config = Config::from_env().expect("Failed to load configuration from environment");

    // Initialize the database connection pool
    let db = match DatabaseConnection::new(config.database.clone()).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!("Failed to initialize database connection: {e:#}");
            panic!("Cannot start server without a database connection");
        }
    };

    // Make sure the pings table exists before accepting traffic
    migrations::ensure_schema(db.pool())
        .await
        .expect("Failed to bootstrap database schema");

    let app_state = AppState { db };

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/ping", get(ping::list_pings).post(ping::create_ping))
        .route("/ping/{ping_id}", delete(ping::delete_ping))
        .route("/ping/{ping_id}/plus-one", post(ping::plus_one))
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([
                        axum::http::Method::GET,
                        axum::http::Method::POST,
                        axum::http::Method::DELETE,
                        axum::http::Method::OPTIONS,
                    ])
                    .allow_headers([
                        axum::http::header::ORIGIN,
                        axum::http::header::CONTENT_TYPE,
                        axum::http::header::ACCEPT,
                    ]),
            ),
        )
        .with_state(app_state);

    let addr = std::net::SocketAddr::new(
        config
            .server
            .host
            .parse()
            .expect("SERVER_HOST is not a valid IP address"),
        config.server.port,
    );

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address - port may already be in use");

    tracing::info!("🚀 Ping Server starting...");
    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("🏥 Health check available at http://{}/health", addr);
    tracing::info!("📍 Ping endpoints available at http://{}/ping", addr);

    axum::serve(listener, app).await.unwrap();
}
