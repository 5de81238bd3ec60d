//! # Database Module
//!
//! PostgreSQL integration using tokio-postgres with deadpool pooling.
//! Includes connection management, the Ping model, and schema bootstrap.

pub mod connection;
pub mod migrations;
pub mod models;
