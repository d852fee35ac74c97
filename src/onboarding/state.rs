use crate::models::submission::SubmissionDraft;

/// Every field the wizard knows about. Fixed at construction; set() rejects
/// anything else so a stray form input can never widen the record.
pub const FIELDS: &[&str] = &[
    "venue_name",
    "venue_location",
    "venue_capacity",
    "first_name",
    "last_name",
    "role_at_venue",
    "contact_method",
    "contact_value",
    "tool_excitement",
    "tool_excitement_other",
    "artist_discovery_methods",
    "artist_discovery_other",
];

/// A typed field value. Text covers plain and enum-like inputs, Count the
/// capacity number, Choices the multi-select option sets.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Count(Option<i64>),
    Choices(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError { field, message: message.into() }
    }
}

/// In-memory holder for the full draft record plus per-field error
/// annotations. Single-threaded; every mutation is immediately visible to
/// the validator and the step views.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: SubmissionDraft,
    errors: Vec<FieldError>,
}

impl FormState {
    pub fn new() -> Self {
        FormState::default()
    }

    /// Populate wholesale from a stored record, e.g. on resume.
    pub fn from_draft(draft: SubmissionDraft) -> Self {
        FormState { draft, errors: Vec::new() }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn get(&self, field: &str) -> Option<FieldValue> {
        let d = &self.draft;
        let value = match field {
            "venue_name" => FieldValue::Text(d.venue_name.clone()),
            "venue_location" => FieldValue::Text(d.venue_location.clone()),
            "venue_capacity" => FieldValue::Count(d.venue_capacity),
            "first_name" => FieldValue::Text(d.first_name.clone()),
            "last_name" => FieldValue::Text(d.last_name.clone()),
            "role_at_venue" => FieldValue::Text(d.role_at_venue.clone()),
            "contact_method" => FieldValue::Text(d.contact_method.clone()),
            "contact_value" => FieldValue::Text(d.contact_value.clone()),
            "tool_excitement" => FieldValue::Choices(d.tool_excitement.clone()),
            "tool_excitement_other" => FieldValue::Text(d.tool_excitement_other.clone()),
            "artist_discovery_methods" => FieldValue::Choices(d.artist_discovery_methods.clone()),
            "artist_discovery_other" => FieldValue::Text(d.artist_discovery_other.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// Set a single field. Returns false (and changes nothing) for an
    /// unknown field name or a value of the wrong shape.
    pub fn set(&mut self, field: &str, value: FieldValue) -> bool {
        let d = &mut self.draft;
        match (field, value) {
            ("venue_name", FieldValue::Text(v)) => d.venue_name = v,
            ("venue_location", FieldValue::Text(v)) => d.venue_location = v,
            ("venue_capacity", FieldValue::Count(v)) => d.venue_capacity = v,
            ("first_name", FieldValue::Text(v)) => d.first_name = v,
            ("last_name", FieldValue::Text(v)) => d.last_name = v,
            ("role_at_venue", FieldValue::Text(v)) => d.role_at_venue = v,
            ("contact_method", FieldValue::Text(v)) => d.contact_method = v,
            ("contact_value", FieldValue::Text(v)) => d.contact_value = v,
            ("tool_excitement", FieldValue::Choices(v)) => d.tool_excitement = v,
            ("tool_excitement_other", FieldValue::Text(v)) => d.tool_excitement_other = v,
            ("artist_discovery_methods", FieldValue::Choices(v)) => d.artist_discovery_methods = v,
            ("artist_discovery_other", FieldValue::Text(v)) => d.artist_discovery_other = v,
            _ => return false,
        }
        true
    }

    /// Reset a field to its empty value, keeping its shape.
    pub fn reset(&mut self, field: &str) -> bool {
        match self.get(field) {
            Some(FieldValue::Text(_)) => self.set(field, FieldValue::Text(String::new())),
            Some(FieldValue::Count(_)) => self.set(field, FieldValue::Count(None)),
            Some(FieldValue::Choices(_)) => self.set(field, FieldValue::Choices(Vec::new())),
            None => false,
        }
    }

    /// Fold one raw form input into the state. Text fields are replaced,
    /// choice sets accumulate (repeated keys from checkboxes), the capacity
    /// count is parsed leniently: anything non-numeric becomes None and is
    /// caught by validation.
    pub fn apply_input(&mut self, field: &str, raw: &str) -> bool {
        match self.get(field) {
            Some(FieldValue::Text(_)) => self.set(field, FieldValue::Text(raw.trim().to_string())),
            Some(FieldValue::Count(_)) => {
                self.set(field, FieldValue::Count(raw.trim().parse().ok()))
            }
            Some(FieldValue::Choices(mut current)) => {
                let v = raw.trim();
                if !v.is_empty() && !current.iter().any(|c| c == v) {
                    current.push(v.to_string());
                }
                self.set(field, FieldValue::Choices(current))
            }
            None => false,
        }
    }

    pub fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
