use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::AppState;
use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject the request with 403 unless `x-api-key` matches the configured key.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !key_matches(&state.api_key, req.headers().get(API_KEY_HEADER)) {
        warn!("Rejected {} {}: missing or invalid API key", req.method(), req.uri().path());
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(req).await)
}

/// Constant-time comparison. An empty configured key never matches, so an
/// unset `API_KEY` cannot be satisfied by an empty header.
fn key_matches(expected: &str, presented: Option<&HeaderValue>) -> bool {
    let Some(presented) = presented else {
        return false;
    };
    if expected.is_empty() {
        return false;
    }
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}
