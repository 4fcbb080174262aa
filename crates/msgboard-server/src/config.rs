use std::path::PathBuf;

use anyhow::Context;

/// Connection settings for a networked server. The embedded store is
/// located by `DB_DATABASE` alone.
const UNUSED_DB_VARS: &[&str] = &["DB_HOST", "DB_PORT", "DB_USERNAME", "DB_PASSWORD"];

/// Runtime configuration, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub front_host: String,
    pub api_key: String,
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Names from [`UNUSED_DB_VARS`] that are set in the environment.
    pub ignored_db_vars: Vec<&'static str>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let front_host = var("FRONT_HOST").unwrap_or_else(|| "http://localhost:3000".into());
        let api_key = var("API_KEY").unwrap_or_default();
        let db_path = var("DB_DATABASE")
            .unwrap_or_else(|| "messages.db".into())
            .into();
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => 5000,
        };
        let ignored_db_vars = UNUSED_DB_VARS
            .iter()
            .copied()
            .filter(|name| var(*name).is_some())
            .collect();

        Ok(Self {
            front_host,
            api_key,
            db_path,
            host,
            port,
            ignored_db_vars,
        })
    }
}
