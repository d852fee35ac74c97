/// All lead-capture form fields, without identity. This is the record the
/// onboarding wizard mutates step by step; every field starts empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub venue_name: String,
    pub venue_location: String,
    pub venue_capacity: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub role_at_venue: String,
    pub contact_method: String,
    pub contact_value: String,
    pub tool_excitement: Vec<String>,
    pub tool_excitement_other: String,
    pub artist_discovery_methods: Vec<String>,
    pub artist_discovery_other: String,
}

/// A stored submission. The id is assigned by the database on first save and
/// never changes; the resume token is the public identifier used in
/// "continue later" links.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: i64,
    pub resume_token: String,
    pub draft: SubmissionDraft,
    pub created_at: String,
    pub updated_at: String,
}

/// Sort direction for the admin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn parse(s: &str) -> Self {
        match s {
            "asc" => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}
