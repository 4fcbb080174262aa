use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Create the `messages` table if it does not exist yet.
///
/// `created_at` defaults to an RFC 3339 UTC timestamp with millisecond
/// precision. AUTOINCREMENT keeps ids from being reused after a delete.
pub fn ensure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL,
            message     TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_messages_created
            ON messages(created_at);
        ",
    )?;

    info!("Messages table ready");
    Ok(())
}
