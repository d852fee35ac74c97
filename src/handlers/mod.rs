use serde::Deserialize;

pub mod admin_handlers;
pub mod onboarding_handlers;
pub mod page_handlers;

/// Form body for POST actions that carry no data of their own.
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}
