// Database Models
//
// Tokio-postgres compatible model for the ping entity, plus id generation.
// Wire field names are camelCase to match the public JSON contract.

use chrono::{DateTime, Utc};
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Trait for converting from tokio-postgres Row
pub trait FromRow {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error>
    where
        Self: Sized;
}

/// A location check-in with a community plus-one counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ping {
    /// Service-generated unique id; never reused after deletion
    pub id: String,
    pub username: String,
    pub location: String,
    /// Upvote counter, only ever moved by the plus-one operation
    pub plus_one_count: i32,
    /// Set by the store at insert time, immutable afterwards
    pub created_at: DateTime<Utc>,
}

impl FromRow for Ping {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            location: row.try_get("location")?,
            plus_one_count: row.try_get("plus_one_count")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Generate a fresh collision-resistant id for a new ping.
pub fn generate_ping_id() -> String {
    nanoid!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = generate_ping_id();
        let b = generate_ping_id();

        assert!(!a.is_empty());
        assert_eq!(a.len(), 21); // default nanoid length
        assert_ne!(a, b);
    }

    #[test]
    fn test_ping_serializes_camel_case() {
        let ping = Ping {
            id: "abc123".to_string(),
            username: "alice".to_string(),
            location: "nyc".to_string(),
            plus_one_count: 2,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&ping).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["id"], "abc123");
        assert_eq!(obj["username"], "alice");
        assert_eq!(obj["location"], "nyc");
        assert_eq!(obj["plusOneCount"], 2);
        assert!(obj.contains_key("createdAt"));
    }
}
