//! Per-step schema checks. Pure and synchronous: given a step index and the
//! full current record, return the ordered list of (field, message) errors
//! for that step's fields only. The sequencer applies the result to the
//! form state for display.

use crate::models::submission::SubmissionDraft;

use super::OTHER_SENTINEL;
use super::state::FieldError;

pub fn validate_step(step: usize, draft: &SubmissionDraft) -> Vec<FieldError> {
    match step {
        0 => validate_venue(draft),
        1 => validate_contact(draft),
        2 => validate_choice_set(
            &draft.tool_excitement,
            &draft.tool_excitement_other,
            "tool_excitement",
            "tool_excitement_other",
            "Please select at least one option",
            "Please specify what excites you",
        ),
        3 => validate_choice_set(
            &draft.artist_discovery_methods,
            &draft.artist_discovery_other,
            "artist_discovery_methods",
            "artist_discovery_other",
            "Please select at least one discovery method",
            "Please specify how you find artists",
        ),
        _ => Vec::new(),
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn validate_venue(draft: &SubmissionDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "venue_name", &draft.venue_name, "Venue name is required");
    require(&mut errors, "venue_location", &draft.venue_location, "Venue location is required");
    match draft.venue_capacity {
        None => errors.push(FieldError::new("venue_capacity", "Venue capacity is required")),
        Some(n) if n <= 0 => {
            errors.push(FieldError::new("venue_capacity", "Capacity must be a positive number"))
        }
        Some(_) => {}
    }
    errors
}

fn validate_contact(draft: &SubmissionDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(&mut errors, "first_name", &draft.first_name, "First name is required");
    require(&mut errors, "last_name", &draft.last_name, "Last name is required");
    require(&mut errors, "role_at_venue", &draft.role_at_venue, "Role at venue is required");

    match draft.contact_method.as_str() {
        "email" => {
            if let Some(msg) = validate_email(&draft.contact_value) {
                errors.push(FieldError::new("contact_value", msg));
            }
        }
        "phone" => {
            if let Some(msg) = validate_phone(&draft.contact_value) {
                errors.push(FieldError::new("contact_value", msg));
            }
        }
        _ => errors.push(FieldError::new("contact_method", "Contact method is required")),
    }
    errors
}

/// Email shape check: non-empty, contains '@' and '.', max 254 chars.
fn validate_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Email address is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address".to_string());
    }
    None
}

/// Phone shape check: at least 7 digits, allowing separators.
fn validate_phone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    if digits < 7 || !valid_chars {
        return Some("Phone must be a valid number".to_string());
    }
    None
}

/// A choice-set step: at least one selection, and the free-text "other"
/// field required exactly when the live set contains the sentinel.
fn validate_choice_set(
    selected: &[String],
    other_value: &str,
    set_field: &'static str,
    other_field: &'static str,
    empty_msg: &str,
    other_msg: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if selected.is_empty() {
        errors.push(FieldError::new(set_field, empty_msg));
    }
    if selected.iter().any(|s| s == OTHER_SENTINEL) && other_value.trim().is_empty() {
        errors.push(FieldError::new(other_field, other_msg));
    }
    errors
}
