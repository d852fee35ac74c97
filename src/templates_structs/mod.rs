// Template context structures for Askama templates, organized by page group.

use actix_session::Session;
use rusqlite::Connection;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::models::setting;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session, conn: &Connection) -> Self {
        let app_name = setting::get_value(conn, "app.name", "MusicDB");
        let csrf_token = csrf::get_or_create_token(session);
        let flash = take_flash(session);
        Self { app_name, csrf_token, flash }
    }
}

mod admin;
mod onboarding;
mod pages;

pub use self::admin::{AdminDashboardTemplate, AdminLoginTemplate, SubmissionRow};
pub use self::onboarding::{
    ChoiceView, CompleteTemplate, ContactStepTemplate, DiscoveryStepTemplate,
    ExcitementStepTemplate, FieldView, StepNav, VenueStepTemplate,
};
pub use self::pages::{AboutTemplate, LandingTemplate};
