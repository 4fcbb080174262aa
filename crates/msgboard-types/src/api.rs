use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// -- Messages --

/// Body of `POST /messages` and `PUT /messages/{id}`.
///
/// Fields are taken as whatever JSON the client sent. An absent field is
/// bound as SQL NULL, scalars are bound as-is, and the table's constraints
/// decide whether the statement succeeds.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    pub username: Option<Value>,
    pub message: Option<Value>,
}

/// One row as returned by `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub username: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Returned by `POST /messages`: the submitted fields plus the assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedMessage {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// Returned by `PUT /messages/{id}`. The id is echoed exactly as it appeared
/// in the path, so it serializes as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedMessage {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

// -- Errors --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
