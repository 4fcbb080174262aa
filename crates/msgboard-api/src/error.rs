use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use msgboard_types::api::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forbidden")]
    Forbidden,

    #[error("bad request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Database(#[from] anyhow::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Store failures are logged in full but never sent to the client.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Forbidden => ErrorBody::new("Forbidden"),
            ApiError::BadRequest(detail) => {
                debug!("Rejected request body: {}", detail);
                ErrorBody::new("Bad Request")
            }
            ApiError::Database(e) => {
                error!("Database error: {:#}", e);
                ErrorBody::new("Internal Server Error")
            }
            ApiError::Join(e) => {
                error!("spawn_blocking join error: {}", e);
                ErrorBody::new("Internal Server Error")
            }
        };
        (status, Json(body)).into_response()
    }
}
