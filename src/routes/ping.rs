//! Ping entity endpoints: list, create, delete, and plus-one.
//!
//! Every handler is a single persistence call plus response shaping. The
//! pool handle arrives through `AppState`; missing records surface as 404
//! "Ping not found" and malformed create bodies as 400.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::database::models::{Ping, generate_ping_id};
use crate::error::ApiError;
use crate::server::AppState;

/// Declarative schema for the create body: both fields required strings.
#[derive(Debug, Deserialize)]
pub struct CreatePingRequest {
    pub username: String,
    pub location: String,
}

/// Validate a raw JSON body against the create schema.
///
/// Absent fields, non-string values, and non-object bodies all fail the
/// same way; unknown extra fields are ignored.
fn parse_create_request(body: Value) -> Result<CreatePingRequest, ApiError> {
    serde_json::from_value(body).map_err(|_| ApiError::validation("Missing required fields"))
}

/// GET /ping
///
/// Returns all pings as a JSON array, newest first. An empty table yields
/// `[]`, never an error.
pub async fn list_pings(State(state): State<AppState>) -> Result<Json<Vec<Ping>>, ApiError> {
    let pings = state.db.list_pings().await?;
    Ok(Json(pings))
}

/// POST /ping
///
/// Creates a new ping from `{username, location}` and returns the full
/// stored record, including the generated id and creation timestamp.
/// Responds 400 when required fields are missing or malformed.
pub async fn create_ping(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Ping>, ApiError> {
    let req = parse_create_request(body)?;

    let id = generate_ping_id();
    let ping = state.db.create_ping(&id, &req.username, &req.location).await?;

    tracing::info!("created ping {} for {} at {}", ping.id, ping.username, ping.location);
    Ok(Json(ping))
}

/// DELETE /ping/{pingId}
///
/// Permanently removes the ping. Responds with the deleted id, or 404
/// "Ping not found" if no such record exists. There is no recovery.
pub async fn delete_ping(
    State(state): State<AppState>,
    Path(ping_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.db.delete_ping(&ping_id).await? {
        Some(id) => {
            tracing::info!("deleted ping {}", id);
            Ok(Json(json!({ "id": id })))
        }
        None => Err(ApiError::not_found("Ping not found")),
    }
}

/// POST /ping/{pingId}/plus-one
///
/// Atomically bumps the ping's counter by 1 at the store level and returns
/// the new value. Responds 404 "Ping not found" if no such record exists.
pub async fn plus_one(
    State(state): State<AppState>,
    Path(ping_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.db.increment_plus_one(&ping_id).await? {
        Some(count) => Ok(Json(json!({ "plusOneCount": count }))),
        None => Err(ApiError::not_found("Ping not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create_body() {
        let req = parse_create_request(json!({"username": "alice", "location": "nyc"})).unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.location, "nyc");
    }

    #[test]
    fn test_missing_username_is_rejected() {
        let err = parse_create_request(json!({"location": "nyc"})).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_missing_location_is_rejected() {
        assert!(parse_create_request(json!({"username": "alice"})).is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(parse_create_request(json!({"username": 42, "location": "nyc"})).is_err());
        assert!(parse_create_request(json!({"username": "alice", "location": null})).is_err());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(parse_create_request(json!("alice")).is_err());
        assert!(parse_create_request(json!(["alice", "nyc"])).is_err());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let req = parse_create_request(json!({
            "username": "alice",
            "location": "nyc",
            "plusOneCount": 99
        }))
        .unwrap();
        assert_eq!(req.username, "alice");
    }
}
