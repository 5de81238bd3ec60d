//! Database Migrations
//!
//! Idempotent schema bootstrap for the pings table, run once at startup.

use anyhow::{Context, Result};
use deadpool_postgres::Pool;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS pings (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    location TEXT NOT NULL,
    plus_one_count INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS pings_created_at_idx ON pings (created_at DESC);
";

/// Ensure the pings table and its listing index exist.
pub async fn ensure_schema(pool: &Pool) -> Result<()> {
    tracing::info!("🔄 Ensuring database schema...");

    let client = pool
        .get()
        .await
        .context("Failed to get connection for schema bootstrap")?;

    client
        .batch_execute(SCHEMA)
        .await
        .context("Failed to bootstrap pings schema")?;

    tracing::info!("✅ Database schema ready");
    Ok(())
}
