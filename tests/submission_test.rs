//! Submission model tests — insert/update/find/list/delete against a real
//! SQLite database.

mod common;

use common::*;
use musicdb::models::submission::{self, SortDir};

#[test]
fn test_insert_assigns_id_and_round_trips() {
    let (_dir, conn) = setup_test_db();

    let draft = full_draft();
    let id = submission::insert(&conn, TEST_TOKEN, &draft).expect("insert failed");
    assert!(id > 0);

    let found = submission::find_by_id(&conn, id)
        .expect("query failed")
        .expect("submission not found");
    assert_eq!(found.id, id);
    assert_eq!(found.resume_token, TEST_TOKEN);
    assert_eq!(found.draft, draft);
    assert!(!found.created_at.is_empty());
}

#[test]
fn test_insert_partial_draft_round_trips() {
    let (_dir, conn) = setup_test_db();

    // Step-by-step persistence means drafts are saved with later steps empty.
    let draft = venue_draft();
    let id = submission::insert(&conn, TEST_TOKEN, &draft).expect("insert failed");

    let found = submission::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(found.draft.venue_capacity, Some(200));
    assert!(found.draft.first_name.is_empty());
    assert!(found.draft.tool_excitement.is_empty());
}

#[test]
fn test_duplicate_resume_token_rejected() {
    let (_dir, conn) = setup_test_db();

    submission::insert(&conn, TEST_TOKEN, &venue_draft()).expect("first insert failed");
    let result = submission::insert(&conn, TEST_TOKEN, &venue_draft());
    assert!(result.is_err(), "token must be unique");
}

#[test]
fn test_update_replaces_fields() {
    let (_dir, conn) = setup_test_db();

    let id = submission::insert(&conn, TEST_TOKEN, &venue_draft()).expect("insert failed");

    let updated = contact_draft();
    submission::update(&conn, id, &updated).expect("update failed");

    let found = submission::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(found.draft, updated);
    assert_eq!(found.resume_token, TEST_TOKEN, "token survives updates");
}

#[test]
fn test_update_missing_row_errors() {
    let (_dir, conn) = setup_test_db();
    let result = submission::update(&conn, 9999, &venue_draft());
    assert!(result.is_err());
}

#[test]
fn test_find_by_token() {
    let (_dir, conn) = setup_test_db();
    let id = submission::insert(&conn, TEST_TOKEN, &venue_draft()).expect("insert failed");

    let found = submission::find_by_token(&conn, TEST_TOKEN)
        .expect("query failed")
        .expect("not found");
    assert_eq!(found.id, id);

    let missing = submission::find_by_token(&conn, "ffffffffffffffff").expect("query failed");
    assert!(missing.is_none());
}

#[test]
fn test_list_search_filters_venue_and_contact_fields() {
    let (_dir, conn) = setup_test_db();

    let mut a = full_draft();
    a.venue_name = "The Loft".to_string();
    let mut b = full_draft();
    b.venue_name = "Red Room".to_string();
    b.first_name = "Dakota".to_string();

    submission::insert(&conn, "aaaa000000000000", &a).unwrap();
    submission::insert(&conn, "bbbb000000000000", &b).unwrap();

    let hits = submission::list(&conn, Some("loft"), "created_at", SortDir::Desc).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].draft.venue_name, "The Loft");

    // Search also matches the contact person.
    let hits = submission::list(&conn, Some("Dakota"), "created_at", SortDir::Desc).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].draft.venue_name, "Red Room");

    // Empty search returns everything.
    let all = submission::list(&conn, None, "created_at", SortDir::Desc).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn test_list_sorts_by_whitelisted_column() {
    let (_dir, conn) = setup_test_db();

    let mut a = venue_draft();
    a.venue_name = "Zanzibar".to_string();
    let mut b = venue_draft();
    b.venue_name = "Annex".to_string();

    submission::insert(&conn, "aaaa000000000000", &a).unwrap();
    submission::insert(&conn, "bbbb000000000000", &b).unwrap();

    let asc = submission::list(&conn, None, "venue_name", SortDir::Asc).unwrap();
    assert_eq!(asc[0].draft.venue_name, "Annex");
    assert_eq!(asc[1].draft.venue_name, "Zanzibar");

    let desc = submission::list(&conn, None, "venue_name", SortDir::Desc).unwrap();
    assert_eq!(desc[0].draft.venue_name, "Zanzibar");

    // Unknown sort fields fall back to created_at instead of erroring.
    let fallback = submission::list(&conn, None, "id; DROP TABLE", SortDir::Asc);
    assert!(fallback.is_ok());
}

#[test]
fn test_delete_removes_row() {
    let (_dir, conn) = setup_test_db();

    let id = submission::insert(&conn, TEST_TOKEN, &venue_draft()).unwrap();
    assert_eq!(submission::count(&conn).unwrap(), 1);

    submission::delete(&conn, id).expect("delete failed");
    assert_eq!(submission::count(&conn).unwrap(), 0);
    assert!(submission::find_by_id(&conn, id).unwrap().is_none());
}
