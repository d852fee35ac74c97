use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

/// One submission prepared for the admin table.
pub struct SubmissionRow {
    pub id: i64,
    pub venue_name: String,
    pub venue_location: String,
    pub capacity: String,
    pub contact_person: String,
    pub role_at_venue: String,
    pub contact: String,
    pub interests: String,
    pub status: String,
    pub submitted: String,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub rows: Vec<SubmissionRow>,
    pub total: usize,
    pub search: String,
    pub sort_field: String,
    pub sort_dir: String,
    pub next_dir: String,
}
