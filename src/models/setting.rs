use rusqlite::{Connection, params};

/// Get a single setting's value by name, returning a default if not found.
pub fn get_value(conn: &Connection, name: &str, default: &str) -> String {
    conn.query_row(
        "SELECT value FROM settings WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )
    .unwrap_or_else(|_| default.to_string())
}

/// Upsert a setting value.
pub fn set_value(conn: &Connection, name: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO settings (name, value) VALUES (?1, ?2) \
         ON CONFLICT(name) DO UPDATE SET value = excluded.value",
        params![name, value],
    )?;
    Ok(())
}
