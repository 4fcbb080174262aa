use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde_json::Value;

use msgboard_types::api::MessageRequest;

use crate::error::ApiError;

/// Lenient body extractor for the write routes.
///
/// Only a JSON `Content-Type` is parsed. Any other content type, or an empty
/// body, yields a request with both fields absent. A top-level object has its
/// `username` / `message` taken verbatim, arrays carry no fields, and
/// anything that is not valid JSON (or is a bare scalar) is a 400.
#[derive(Debug, Default)]
pub struct MessageBody(pub MessageRequest);

impl<S> FromRequest<S> for MessageBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        parse(&bytes).map(Self)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse(bytes: &[u8]) -> Result<MessageRequest, ApiError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    match value {
        Value::Object(mut map) => Ok(MessageRequest {
            username: map.remove("username"),
            message: map.remove("message"),
        }),
        Value::Array(_) => Ok(MessageRequest::default()),
        other => Err(ApiError::BadRequest(format!(
            "expected a JSON object or array, got {}",
            other
        ))),
    }
}
