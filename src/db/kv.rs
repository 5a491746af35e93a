//! String-keyed value store on top of the `storage` table.
//!
//! Values are opaque text; callers decide the encoding.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// Read the value stored under `key`, if any.
pub fn get_item(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Store `value` under `key`, replacing any previous value.
pub fn set_item(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Drop `key`. Returns true when something was removed.
pub fn remove_item(conn: &Connection, key: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM storage WHERE key = ?1", params![key])?;
    Ok(n > 0)
}
