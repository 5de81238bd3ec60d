//! # Ping Server
//!
//! A small HTTP API server built with Rust, Axum, and Tokio that exposes
//! CRUD operations for "ping" check-ins (a username, a location, and a
//! community plus-one counter) backed by PostgreSQL.
//!
//! ## Features
//! - Async/await HTTP server using Axum framework
//! - Structured logging with tracing
//! - Connection-pooled PostgreSQL persistence via deadpool
//! - Health check endpoint for monitoring
//!
//! ## Architecture
//! The server is organized into modules:
//! - `server`: Core server initialization and route wiring
//! - `config`: Environment variable configuration management
//! - `database`: Connection pool, models, and schema bootstrap
//! - `routes`: HTTP route handlers organized by functionality
//!   - `health`: Health check endpoint
//!   - `ping`: Ping entity endpoints (list/create/delete/plus-one)
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and configure:
//! ```bash
//! cp .env.example .env
//! # Edit .env with your DATABASE_URL
//! ```
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! The server will start on `http://0.0.0.0:3000` by default.

mod config;
mod database;
mod error;
mod routes;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application entry point.
///
/// Loads `.env`, initializes the tracing/logging system, and starts the
/// HTTP server. This function will run indefinitely until the process is
/// terminated.
#[tokio::main]
async fn main() {
    // Load environment variables from .env if present
    dotenv::dotenv().ok();

    // Initialize the tracing subscriber for structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module targets for cleaner output
                .compact(),
        )
        .init();

    tracing::info!("🏁 Starting Ping Server...");
    tracing::info!("📦 Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    tracing::info!("🏗️  Build profile: {}", if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    });

    // Start the HTTP server - this will run indefinitely
    server::start().await;
}
