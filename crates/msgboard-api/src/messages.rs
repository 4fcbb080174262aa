use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

use msgboard_db::models::MessageRow;
use msgboard_types::api::{CreatedMessage, MessageResponse, UpdatedMessage};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::MessageBody;

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    // Run blocking DB query off the async runtime
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_messages()).await??;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

pub async fn create_message(
    State(state): State<AppState>,
    MessageBody(req): MessageBody,
) -> Result<Json<CreatedMessage>, ApiError> {
    let db = state.clone();
    let username = req.username.clone();
    let message = req.message.clone();
    let id = tokio::task::spawn_blocking(move || {
        db.db.insert_message(username.as_ref(), message.as_ref())
    })
    .await??;

    debug!("Created message {}", id);
    Ok(Json(CreatedMessage {
        id,
        username: req.username,
        message: req.message,
    }))
}

/// Overwrites the row and echoes the submitted values. An id that matches
/// nothing is not an error.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    MessageBody(req): MessageBody,
) -> Result<Json<UpdatedMessage>, ApiError> {
    let db = state.clone();
    let mid = id.clone();
    let username = req.username.clone();
    let message = req.message.clone();
    let changed = tokio::task::spawn_blocking(move || {
        db.db.update_message(&mid, username.as_ref(), message.as_ref())
    })
    .await??;

    debug!("Updated message {} ({} rows)", id, changed);
    Ok(Json(UpdatedMessage {
        id,
        username: req.username,
        message: req.message,
    }))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let db = state.clone();
    let mid = id.clone();
    let changed = tokio::task::spawn_blocking(move || db.db.delete_message(&mid)).await??;

    debug!("Deleted message {} ({} rows)", id, changed);
    Ok(StatusCode::NO_CONTENT)
}

fn to_response(row: MessageRow) -> MessageResponse {
    let created_at = parse_created_at(&row.created_at).unwrap_or_else(|| {
        warn!("Corrupt created_at '{}' on message {}", row.created_at, row.id);
        DateTime::default()
    });

    MessageResponse {
        id: row.id,
        username: row.username,
        message: row.message,
        created_at,
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // Rows written by hand through the sqlite3 shell usually carry
            // datetime('now') output: "YYYY-MM-DD HH:MM:SS", no timezone.
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .ok()
}
