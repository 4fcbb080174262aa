pub mod error;
pub mod extract;
pub mod messages;
pub mod middleware;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    routing::{get, put},
};
use tower_http::cors::{AllowHeaders, CorsLayer};

use msgboard_db::Database;
use msgboard_types::api::ErrorBody;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub api_key: String,
}

impl AppStateInner {
    pub fn new(db: Database, api_key: impl Into<String>) -> AppState {
        Arc::new(Self {
            db,
            api_key: api_key.into(),
        })
    }
}

/// Build the full HTTP surface: the message routes behind the API key guard,
/// wrapped in a CORS layer that admits `front_origin` with credentials.
///
/// CORS sits outside the guard so browser preflights, which never carry the
/// key, are answered without being rejected.
pub fn router(state: AppState, front_origin: &str) -> anyhow::Result<Router> {
    let origin: HeaderValue = front_origin
        .parse()
        .with_context(|| format!("invalid CORS origin '{}'", front_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let collection = get(messages::list_messages).post(messages::create_message);
    let item = put(messages::update_message).delete(messages::delete_message);

    // Paths match with or without a trailing slash.
    let app = Router::new()
        .route("/messages", collection.clone())
        .route("/messages/", collection)
        .route("/messages/{id}", item.clone())
        .route("/messages/{id}/", item)
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), middleware::require_api_key))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not Found")))
}
