//! Form state holder tests — fixed field set, typed access, input folding,
//! and error annotations.

mod common;

use common::*;
use musicdb::onboarding::{FIELDS, FieldError, FieldValue, FormState};

#[test]
fn test_every_declared_field_is_reachable() {
    let mut state = FormState::new();
    for field in FIELDS {
        assert!(state.get(field).is_some(), "{field} not readable");
        assert!(state.reset(field), "{field} not resettable");
    }
}

#[test]
fn test_unknown_field_rejected() {
    let mut state = FormState::new();
    assert!(state.get("is_admin").is_none());
    assert!(!state.set("is_admin", FieldValue::Text("true".to_string())));
    assert!(!state.apply_input("favorite_color", "blue"));
}

#[test]
fn test_wrong_shape_rejected() {
    let mut state = FormState::new();
    assert!(!state.set("venue_name", FieldValue::Count(Some(3))));
    assert!(!state.set("venue_capacity", FieldValue::Text("lots".to_string())));
}

#[test]
fn test_set_is_immediately_visible() {
    let mut state = FormState::new();
    assert!(state.set("venue_name", FieldValue::Text("The Loft".to_string())));
    assert_eq!(
        state.get("venue_name"),
        Some(FieldValue::Text("The Loft".to_string()))
    );
    assert_eq!(state.draft().venue_name, "The Loft");
}

#[test]
fn test_apply_input_parses_capacity_leniently() {
    let mut state = FormState::new();

    state.apply_input("venue_capacity", " 250 ");
    assert_eq!(state.get("venue_capacity"), Some(FieldValue::Count(Some(250))));

    state.apply_input("venue_capacity", "lots");
    assert_eq!(state.get("venue_capacity"), Some(FieldValue::Count(None)));
}

#[test]
fn test_apply_input_accumulates_choices_without_duplicates() {
    let mut state = FormState::new();

    state.apply_input("tool_excitement", "track_shows");
    state.apply_input("tool_excitement", "other");
    state.apply_input("tool_excitement", "track_shows");

    assert_eq!(
        state.get("tool_excitement"),
        Some(FieldValue::Choices(vec![
            "track_shows".to_string(),
            "other".to_string()
        ]))
    );
}

#[test]
fn test_reset_keeps_field_shape() {
    let mut state = FormState::from_draft(full_draft());

    assert!(state.reset("tool_excitement"));
    assert_eq!(state.get("tool_excitement"), Some(FieldValue::Choices(vec![])));

    assert!(state.reset("venue_capacity"));
    assert_eq!(state.get("venue_capacity"), Some(FieldValue::Count(None)));

    assert!(!state.reset("no_such_field"));
}

#[test]
fn test_errors_are_ordered_and_queryable() {
    let mut state = FormState::new();
    state.set_errors(vec![
        FieldError::new("venue_name", "Venue name is required"),
        FieldError::new("venue_location", "Venue location is required"),
    ]);

    assert_eq!(state.errors().len(), 2);
    assert_eq!(state.errors()[0].field, "venue_name");
    assert_eq!(state.error_for("venue_location"), Some("Venue location is required"));
    assert_eq!(state.error_for("venue_capacity"), None);

    state.clear_errors();
    assert!(state.errors().is_empty());
}
