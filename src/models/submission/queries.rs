use rusqlite::{Connection, params};

use super::types::{SortDir, Submission, SubmissionDraft};

const SELECT_SUBMISSION: &str = "\
    SELECT id, resume_token, venue_name, venue_location, venue_capacity, \
           first_name, last_name, role_at_venue, contact_method, contact_value, \
           tool_excitement, tool_excitement_other, \
           artist_discovery_methods, artist_discovery_other, \
           created_at, updated_at \
    FROM venue_submissions";

fn decode_list(json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_default()
}

fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

fn row_to_submission(row: &rusqlite::Row) -> rusqlite::Result<Submission> {
    let tool_excitement: String = row.get("tool_excitement")?;
    let discovery: String = row.get("artist_discovery_methods")?;
    Ok(Submission {
        id: row.get("id")?,
        resume_token: row.get("resume_token")?,
        draft: SubmissionDraft {
            venue_name: row.get("venue_name")?,
            venue_location: row.get("venue_location")?,
            venue_capacity: row.get("venue_capacity")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            role_at_venue: row.get("role_at_venue")?,
            contact_method: row.get("contact_method")?,
            contact_value: row.get("contact_value")?,
            tool_excitement: decode_list(&tool_excitement),
            tool_excitement_other: row.get("tool_excitement_other")?,
            artist_discovery_methods: decode_list(&discovery),
            artist_discovery_other: row.get("artist_discovery_other")?,
        },
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a new submission with its resume token. Returns the assigned id.
pub fn insert(conn: &Connection, resume_token: &str, draft: &SubmissionDraft) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO venue_submissions \
         (resume_token, venue_name, venue_location, venue_capacity, \
          first_name, last_name, role_at_venue, contact_method, contact_value, \
          tool_excitement, tool_excitement_other, \
          artist_discovery_methods, artist_discovery_other) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            resume_token,
            draft.venue_name,
            draft.venue_location,
            draft.venue_capacity,
            draft.first_name,
            draft.last_name,
            draft.role_at_venue,
            draft.contact_method,
            draft.contact_value,
            encode_list(&draft.tool_excitement),
            draft.tool_excitement_other,
            encode_list(&draft.artist_discovery_methods),
            draft.artist_discovery_other,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace all draft fields of an existing submission. Idempotent for a
/// given draft; bumps updated_at.
pub fn update(conn: &Connection, id: i64, draft: &SubmissionDraft) -> rusqlite::Result<()> {
    let changed = conn.execute(
        "UPDATE venue_submissions SET \
         venue_name = ?1, venue_location = ?2, venue_capacity = ?3, \
         first_name = ?4, last_name = ?5, role_at_venue = ?6, \
         contact_method = ?7, contact_value = ?8, \
         tool_excitement = ?9, tool_excitement_other = ?10, \
         artist_discovery_methods = ?11, artist_discovery_other = ?12, \
         updated_at = strftime('%Y-%m-%dT%H:%M:%S','now') \
         WHERE id = ?13",
        params![
            draft.venue_name,
            draft.venue_location,
            draft.venue_capacity,
            draft.first_name,
            draft.last_name,
            draft.role_at_venue,
            draft.contact_method,
            draft.contact_value,
            encode_list(&draft.tool_excitement),
            draft.tool_excitement_other,
            encode_list(&draft.artist_discovery_methods),
            draft.artist_discovery_other,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(rusqlite::Error::QueryReturnedNoRows);
    }
    Ok(())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Submission>> {
    let sql = format!("{SELECT_SUBMISSION} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map(params![id], row_to_submission)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

pub fn find_by_token(conn: &Connection, token: &str) -> rusqlite::Result<Option<Submission>> {
    let sql = format!("{SELECT_SUBMISSION} WHERE resume_token = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map(params![token], row_to_submission)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// Map a requested sort field to a real column. Unknown fields fall back to
/// created_at so query params can never inject SQL.
pub fn sort_col(field: &str) -> &'static str {
    match field {
        "venue_name" => "venue_name",
        "venue_location" => "venue_location",
        "venue_capacity" => "venue_capacity",
        "updated_at" => "updated_at",
        _ => "created_at",
    }
}

/// List submissions for the admin table, optionally filtered by a search
/// term over venue and contact-person fields.
pub fn list(
    conn: &Connection,
    search: Option<&str>,
    sort_field: &str,
    dir: SortDir,
) -> rusqlite::Result<Vec<Submission>> {
    let col = sort_col(sort_field);
    let dir_sql = match dir {
        SortDir::Asc => "ASC",
        SortDir::Desc => "DESC",
    };
    let sql = format!(
        "{SELECT_SUBMISSION} \
         WHERE (?1 = '' OR venue_name LIKE '%' || ?1 || '%' \
            OR venue_location LIKE '%' || ?1 || '%' \
            OR first_name LIKE '%' || ?1 || '%' \
            OR last_name LIKE '%' || ?1 || '%') \
         ORDER BY {col} {dir_sql}"
    );
    let term = search.unwrap_or("").trim();
    let mut stmt = conn.prepare(&sql)?;
    let submissions = stmt
        .query_map(params![term], row_to_submission)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(submissions)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM venue_submissions WHERE id = ?1", params![id])?;
    Ok(())
}

pub fn count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM venue_submissions", [], |row| row.get(0))
}
