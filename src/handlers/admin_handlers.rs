use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::auth::{csrf, password};
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::setting;
use crate::models::submission::{self, SortDir, Submission};
use crate::onboarding::{self, DATA_STEPS, EXCITEMENT_OPTIONS};
use crate::templates_structs::{
    AdminDashboardTemplate, AdminLoginTemplate, PageContext, SubmissionRow,
};

use super::CsrfOnly;

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    q: Option<String>,
    sort: Option<String>,
    dir: Option<String>,
}

pub async fn login_page(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if crate::auth::session::is_admin(&session) {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/dashboard"))
            .finish());
    }
    let conn = pool.get()?;
    let app_name = setting::get_value(&conn, "app.name", "MusicDB");
    let csrf_token = csrf::get_or_create_token(&session);
    render(AdminLoginTemplate { error: None, app_name, csrf_token })
}

pub async fn login_submit(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let conn = pool.get()?;
    let app_name = setting::get_value(&conn, "app.name", "MusicDB");
    let hash = setting::get_value(&conn, "admin.password_hash", "");

    let ok = !hash.is_empty() && password::verify_password(&form.password, &hash)?;
    if ok {
        let _ = session.insert("is_admin", true);
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/admin/dashboard"))
            .finish());
    }

    log::warn!("Failed admin login attempt");
    let csrf_token = csrf::get_or_create_token(&session);
    render(AdminLoginTemplate {
        error: Some("Invalid password".to_string()),
        app_name,
        csrf_token,
    })
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/login"))
        .finish())
}

fn excitement_label(id: &str) -> &str {
    EXCITEMENT_OPTIONS
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.label)
        .unwrap_or(id)
}

fn format_timestamp(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%b %e, %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn to_row(s: &Submission) -> SubmissionRow {
    let d = &s.draft;
    let status = {
        let reached = onboarding::fast_forward(d);
        if reached >= DATA_STEPS {
            "Complete".to_string()
        } else {
            format!("Step {} of {}", reached + 1, DATA_STEPS)
        }
    };
    let mut interests: Vec<String> = d
        .tool_excitement
        .iter()
        .map(|id| excitement_label(id).to_string())
        .collect();
    if !d.tool_excitement_other.is_empty() {
        interests.push(format!("\"{}\"", d.tool_excitement_other));
    }
    SubmissionRow {
        id: s.id,
        venue_name: d.venue_name.clone(),
        venue_location: d.venue_location.clone(),
        capacity: d
            .venue_capacity
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string()),
        contact_person: format!("{} {}", d.first_name, d.last_name).trim().to_string(),
        role_at_venue: d.role_at_venue.clone(),
        contact: if d.contact_method.is_empty() {
            "-".to_string()
        } else {
            format!("{} ({})", d.contact_value, d.contact_method)
        },
        interests: interests.join(", "),
        status,
        submitted: format_timestamp(&s.created_at),
    }
}

pub async fn dashboard(
    pool: web::Data<DbPool>,
    session: Session,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let ctx = PageContext::build(&session, &conn);

    let search = query.q.clone().unwrap_or_default();
    let sort_field = query.sort.clone().unwrap_or_else(|| "created_at".to_string());
    let dir = SortDir::parse(query.dir.as_deref().unwrap_or("desc"));

    let submissions = submission::list(&conn, Some(search.as_str()), &sort_field, dir)?;
    let rows: Vec<SubmissionRow> = submissions.iter().map(to_row).collect();
    let total = rows.len();

    render(AdminDashboardTemplate {
        ctx,
        rows,
        total,
        search,
        sort_field,
        sort_dir: dir.as_str().to_string(),
        next_dir: dir.toggled().as_str().to_string(),
    })
}

pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let conn = pool.get()?;
    submission::delete(&conn, id)?;
    log::info!("Deleted submission {id}");
    let _ = session.insert("flash", "Submission deleted");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/admin/dashboard"))
        .finish())
}
