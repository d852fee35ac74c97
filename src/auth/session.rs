use actix_session::Session;

/// True when the session belongs to a logged-in admin.
pub fn is_admin(session: &Session) -> bool {
    session.get::<bool>("is_admin").unwrap_or(None).unwrap_or(false)
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

/// Id of the draft submission the current visitor is filling in, if any.
pub fn get_submission_id(session: &Session) -> Option<i64> {
    session.get::<i64>("submission_id").unwrap_or(None)
}

pub fn set_submission_id(session: &Session, id: i64) {
    let _ = session.insert("submission_id", id);
}

/// Furthest onboarding step the visitor has reached in this session.
pub fn get_onboarding_step(session: &Session) -> Option<usize> {
    session.get::<usize>("onboarding_step").unwrap_or(None)
}

pub fn set_onboarding_step(session: &Session, step: usize) {
    let _ = session.insert("onboarding_step", step);
}

/// Drop all onboarding draft tracking, e.g. when a resume lookup fails.
pub fn clear_onboarding(session: &Session) {
    session.remove("submission_id");
    session.remove("onboarding_step");
}
