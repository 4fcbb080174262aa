mod config;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use msgboard_api::AppStateInner;
use msgboard_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "msgboard_server=debug,msgboard_api=debug,msgboard_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_empty() {
        warn!("API_KEY is not set; every request will be rejected with 403");
    }
    if !config.ignored_db_vars.is_empty() {
        warn!(
            "Ignoring {}: the database is the SQLite file at {}",
            config.ignored_db_vars.join(", "),
            config.db_path.display()
        );
    }

    // A failed connect is not fatal: requests are still served and fail at
    // query time.
    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            error!("Database connection error ({}): {:#}", config.db_path.display(), e);
            Database::disconnected()
        }
    };

    let state = AppStateInner::new(db, config.api_key);
    let app = msgboard_api::router(state, &config.front_host)?.layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server is running on {} (CORS origin {})", addr, config.front_host);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
