//! Shared test infrastructure.
//!
//! Provides a temporary SQLite database with the full schema applied, plus
//! draft fixtures at the various stages of onboarding completeness.

use rusqlite::Connection;
use tempfile::TempDir;

use musicdb::db::MIGRATIONS;
use musicdb::models::submission::SubmissionDraft;

pub const TEST_TOKEN: &str = "0123456789abcdef0123456789abcdef";

/// Setup a test database with the schema applied.
///
/// Returns a tuple of (TempDir, Connection) where TempDir must be kept
/// alive for the Connection to remain valid.
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");

    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

/// A draft that passes step 0 (venue info) only.
pub fn venue_draft() -> SubmissionDraft {
    SubmissionDraft {
        venue_name: "The Loft".to_string(),
        venue_location: "Austin".to_string(),
        venue_capacity: Some(200),
        ..SubmissionDraft::default()
    }
}

/// A draft that passes steps 0 and 1 (venue + contact) only.
pub fn contact_draft() -> SubmissionDraft {
    SubmissionDraft {
        first_name: "Sam".to_string(),
        last_name: "Rivera".to_string(),
        role_at_venue: "Talent buyer".to_string(),
        contact_method: "email".to_string(),
        contact_value: "sam@example.com".to_string(),
        ..venue_draft()
    }
}

/// A draft that passes every data step.
pub fn full_draft() -> SubmissionDraft {
    SubmissionDraft {
        tool_excitement: vec!["track_shows".to_string(), "rising_talent".to_string()],
        artist_discovery_methods: vec!["social".to_string(), "agent".to_string()],
        ..contact_draft()
    }
}
