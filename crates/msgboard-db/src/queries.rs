use crate::Database;
use crate::models::MessageRow;
use crate::params::JsonParam;
use anyhow::Result;
use rusqlite::Connection;
use serde_json::Value;

impl Database {
    /// All messages, newest first. Rows sharing a timestamp fall back to id
    /// order so the most recent insert still comes first.
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }

    /// Insert a message and return the id the store assigned to it.
    pub fn insert_message(&self, username: Option<&Value>, message: Option<&Value>) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (username, message) VALUES (?1, ?2)",
                rusqlite::params![JsonParam(username), JsonParam(message)],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Overwrite `username` and `message` on the row matching `id`.
    /// Returns the number of rows changed, which is 0 for an unknown id.
    pub fn update_message(
        &self,
        id: &str,
        username: Option<&Value>,
        message: Option<&Value>,
    ) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE messages SET username = ?1, message = ?2 WHERE id = ?3",
                rusqlite::params![JsonParam(username), JsonParam(message), id],
            )?;
            Ok(changed)
        })
    }

    pub fn delete_message(&self, id: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM messages WHERE id = ?1", [id])?;
            Ok(changed)
        })
    }
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, message, created_at
         FROM messages
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                username: row.get(1)?,
                message: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
