use actix_session::Session;
use actix_web::{HttpResponse, web};
use rand::Rng;
use rusqlite::Connection;

use crate::auth::csrf;
use crate::auth::session as flow_session;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::submission;
use crate::onboarding::{
    AdvanceAction, ChoiceOption, DATA_STEPS, DISCOVERY_OPTIONS, EXCITEMENT_OPTIONS,
    FieldValue, OTHER_SENTINEL, RetreatAction, STEP_TITLES, Wizard, step_fields,
};
use crate::templates_structs::{
    ChoiceView, CompleteTemplate, ContactStepTemplate, DiscoveryStepTemplate,
    ExcitementStepTemplate, FieldView, PageContext, StepNav, VenueStepTemplate,
};

use super::CsrfOnly;

/// Random public identifier for "continue later" links. Separate from the
/// row id so resume links are not enumerable.
fn new_resume_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}

fn step_url(step: usize) -> String {
    format!("/onboarding/step/{step}")
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Rebuild the wizard for this visitor: rehydrate from the draft tracked in
/// the session if it still exists, clamped to the step they were on.
/// Returns the wizard and the draft's resume token, if any.
fn load_wizard(conn: &Connection, session: &Session) -> Result<(Wizard, Option<String>), AppError> {
    if let Some(id) = flow_session::get_submission_id(session) {
        match submission::find_by_id(conn, id)? {
            Some(record) => {
                let mut wizard = Wizard::resume(&record);
                if let Some(step) = flow_session::get_onboarding_step(session) {
                    wizard.jump_to(step);
                }
                return Ok((wizard, Some(record.resume_token)));
            }
            // Deleted by an admin in the meantime: start fresh.
            None => flow_session::clear_onboarding(session),
        }
    }
    Ok((Wizard::new(), None))
}

fn field_view(wizard: &Wizard, field: &str) -> FieldView {
    let value = match wizard.state().get(field) {
        Some(FieldValue::Text(v)) => v,
        Some(FieldValue::Count(v)) => v.map(|n| n.to_string()).unwrap_or_default(),
        Some(FieldValue::Choices(v)) => v.join(", "),
        None => String::new(),
    };
    FieldView {
        value,
        error: wizard.state().error_for(field).map(String::from),
    }
}

fn choice_views(options: &'static [ChoiceOption], selected: &[String]) -> Vec<ChoiceView> {
    options
        .iter()
        .map(|opt| ChoiceView {
            id: opt.id,
            label: opt.label,
            description: opt.description,
            checked: selected.iter().any(|s| s == opt.id),
        })
        .collect()
}

fn render_step(
    conn: &Connection,
    session: &Session,
    wizard: &Wizard,
    resume_token: Option<&str>,
    save_failed: bool,
) -> Result<HttpResponse, AppError> {
    let step = wizard.current_step();
    let ctx = PageContext::build(session, conn);
    let nav = StepNav {
        step,
        data_steps: DATA_STEPS,
        title: STEP_TITLES[step],
        is_first: step == 0,
        is_last: step == DATA_STEPS - 1,
        progress: step * 100 / DATA_STEPS,
        resume_url: resume_token.map(|t| format!("/onboarding/resume/{t}")),
        save_failed,
    };
    let draft = wizard.state().draft();

    match step {
        0 => render(VenueStepTemplate {
            ctx,
            nav,
            venue_name: field_view(wizard, "venue_name"),
            venue_location: field_view(wizard, "venue_location"),
            venue_capacity: field_view(wizard, "venue_capacity"),
        }),
        1 => render(ContactStepTemplate {
            ctx,
            nav,
            first_name: field_view(wizard, "first_name"),
            last_name: field_view(wizard, "last_name"),
            role_at_venue: field_view(wizard, "role_at_venue"),
            contact_method: draft.contact_method.clone(),
            contact_method_error: wizard
                .state()
                .error_for("contact_method")
                .map(String::from),
            contact_value: field_view(wizard, "contact_value"),
        }),
        2 => render(ExcitementStepTemplate {
            ctx,
            nav,
            options: choice_views(EXCITEMENT_OPTIONS, &draft.tool_excitement),
            show_other: draft.tool_excitement.iter().any(|s| s == OTHER_SENTINEL),
            other: field_view(wizard, "tool_excitement_other"),
            set_error: wizard.state().error_for("tool_excitement").map(String::from),
        }),
        3 => render(DiscoveryStepTemplate {
            ctx,
            nav,
            options: choice_views(DISCOVERY_OPTIONS, &draft.artist_discovery_methods),
            show_other: draft
                .artist_discovery_methods
                .iter()
                .any(|s| s == OTHER_SENTINEL),
            other: field_view(wizard, "artist_discovery_other"),
            set_error: wizard
                .state()
                .error_for("artist_discovery_methods")
                .map(String::from),
        }),
        _ => Ok(redirect("/onboarding/complete")),
    }
}

/// GET /onboarding — send the visitor to where they left off.
pub async fn start(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let (wizard, _) = load_wizard(&conn, &session)?;
    if wizard.is_complete() {
        return Ok(redirect("/onboarding/complete"));
    }
    Ok(redirect(&step_url(wizard.current_step())))
}

/// GET /onboarding/step/{n}
pub async fn step_page(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let requested = path.into_inner();
    let conn = pool.get()?;
    let (mut wizard, token) = load_wizard(&conn, &session)?;
    wizard.jump_to(requested);
    if wizard.is_complete() {
        return Ok(redirect("/onboarding/complete"));
    }
    if wizard.current_step() != requested {
        // Asked for a step the data has not earned yet.
        return Ok(redirect(&step_url(wizard.current_step())));
    }
    render_step(&conn, &session, &wizard, token.as_deref(), false)
}

/// POST /onboarding/step/{n} — apply the submitted fields and advance.
///
/// The body is parsed as ordered key/value pairs so repeated checkbox keys
/// accumulate into the choice sets.
pub async fn step_submit(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let requested = path.into_inner();
    let pairs = form.into_inner();

    let submitted_token = pairs
        .iter()
        .find(|(k, _)| k == "csrf_token")
        .map(|(_, v)| v.as_str())
        .unwrap_or("");
    csrf::validate_csrf(&session, submitted_token)?;

    let conn = pool.get()?;
    let (mut wizard, token) = load_wizard(&conn, &session)?;
    wizard.jump_to(requested);
    if wizard.is_complete() {
        return Ok(redirect("/onboarding/complete"));
    }
    if wizard.current_step() != requested {
        // Stale form post for a step the draft has not reached.
        return Ok(redirect(&step_url(wizard.current_step())));
    }

    // Unchecked checkboxes post nothing, so the step's fields are reset
    // before folding the submitted pairs back in.
    for field in step_fields(wizard.current_step()) {
        wizard.state_mut().reset(field);
    }
    for (key, value) in &pairs {
        if key == "csrf_token" {
            continue;
        }
        if !wizard.state_mut().apply_input(key, value) {
            log::debug!("Ignoring unknown form field '{key}'");
        }
    }

    match wizard.advance() {
        AdvanceAction::Invalid | AdvanceAction::Busy => {
            render_step(&conn, &session, &wizard, token.as_deref(), false)
        }
        AdvanceAction::AtEnd => Ok(redirect("/onboarding/complete")),
        AdvanceAction::Save(req) => {
            let result = match req.id {
                Some(id) => submission::update(&conn, id, &req.draft).map(|_| id),
                None => submission::insert(&conn, &new_resume_token(), &req.draft),
            };
            match result {
                Ok(id) => {
                    wizard.save_succeeded(id);
                    flow_session::set_submission_id(&session, id);
                    flow_session::set_onboarding_step(&session, wizard.current_step());
                    if wizard.is_complete() {
                        Ok(redirect("/onboarding/complete"))
                    } else {
                        Ok(redirect(&step_url(wizard.current_step())))
                    }
                }
                Err(e) => {
                    log::error!("Failed to save submission: {e}");
                    wizard.save_failed();
                    render_step(&conn, &session, &wizard, token.as_deref(), true)
                }
            }
        }
    }
}

/// POST /onboarding/step/{n}/back — no validation, no save.
pub async fn step_back(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<usize>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let conn = pool.get()?;
    let (mut wizard, _) = load_wizard(&conn, &session)?;
    wizard.jump_to(path.into_inner());
    match wizard.retreat() {
        RetreatAction::ExitHome => Ok(redirect("/")),
        RetreatAction::SteppedBack(step) => {
            flow_session::set_onboarding_step(&session, step);
            Ok(redirect(&step_url(step)))
        }
        RetreatAction::AtEnd => Ok(redirect("/onboarding/complete")),
    }
}

/// GET /onboarding/resume/{token} — rehydrate from a "continue later" link.
/// An unknown token starts a fresh flow rather than erroring.
pub async fn resume(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let token = path.into_inner();
    let conn = pool.get()?;
    match submission::find_by_token(&conn, &token)? {
        Some(record) => {
            let wizard = Wizard::resume(&record);
            flow_session::set_submission_id(&session, record.id);
            flow_session::set_onboarding_step(&session, wizard.current_step());
            if wizard.is_complete() {
                Ok(redirect("/onboarding/complete"))
            } else {
                Ok(redirect(&step_url(wizard.current_step())))
            }
        }
        None => {
            log::info!("Resume token not found, starting fresh");
            flow_session::clear_onboarding(&session);
            Ok(redirect(&step_url(0)))
        }
    }
}

/// GET /onboarding/complete — the terminal step. Acknowledging it ends the
/// session's flow; the next visit starts a new draft.
pub async fn complete(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let (wizard, _) = load_wizard(&conn, &session)?;
    if !wizard.is_complete() {
        return Ok(redirect(&step_url(wizard.current_step())));
    }
    flow_session::clear_onboarding(&session);
    let ctx = PageContext::build(&session, &conn);
    render(CompleteTemplate { ctx })
}
