pub mod models;
pub mod params;
pub mod queries;
pub mod schema;

use anyhow::{Result, anyhow};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// The service's single database connection.
///
/// Every statement is serialized through the mutex. A `Database` built with
/// [`Database::disconnected`] has no connection at all and fails every query,
/// which lets the server keep running after a failed startup connect.
pub struct Database {
    conn: Mutex<Option<Connection>>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        schema::ensure(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::ensure(&conn)?;
        Ok(Self::from_connection(conn))
    }

    pub fn disconnected() -> Self {
        Self {
            conn: Mutex::new(None),
        }
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(Some(conn)),
        }
    }

    #[cfg(test)]
    fn is_connected(&self) -> bool {
        self.conn.lock().map(|c| c.is_some()).unwrap_or(false)
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let guard = self.conn.lock().map_err(|e| anyhow!("DB lock poisoned: {}", e))?;
        let conn = guard.as_ref().ok_or_else(|| anyhow!("database not connected"))?;
        f(conn)
    }
}
