use askama::Template;

use super::PageContext;

/// A text input's current value and inline error.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
}

/// One checkbox in a choice-set step.
#[derive(Debug, Clone)]
pub struct ChoiceView {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub checked: bool,
}

/// Shared chrome for every data step: progress, back target, resume link,
/// and the persistence-failure notice.
pub struct StepNav {
    pub step: usize,
    pub data_steps: usize,
    pub title: &'static str,
    pub is_first: bool,
    pub is_last: bool,
    /// Percentage width for the progress bar.
    pub progress: usize,
    /// "Continue later" link, present once the draft has been saved.
    pub resume_url: Option<String>,
    /// Set when the last save attempt failed; the step re-renders with the
    /// entered data retained.
    pub save_failed: bool,
}

#[derive(Template)]
#[template(path = "onboarding/venue.html")]
pub struct VenueStepTemplate {
    pub ctx: PageContext,
    pub nav: StepNav,
    pub venue_name: FieldView,
    pub venue_location: FieldView,
    pub venue_capacity: FieldView,
}

#[derive(Template)]
#[template(path = "onboarding/contact.html")]
pub struct ContactStepTemplate {
    pub ctx: PageContext,
    pub nav: StepNav,
    pub first_name: FieldView,
    pub last_name: FieldView,
    pub role_at_venue: FieldView,
    pub contact_method: String,
    pub contact_method_error: Option<String>,
    pub contact_value: FieldView,
}

#[derive(Template)]
#[template(path = "onboarding/excitement.html")]
pub struct ExcitementStepTemplate {
    pub ctx: PageContext,
    pub nav: StepNav,
    pub options: Vec<ChoiceView>,
    pub show_other: bool,
    pub other: FieldView,
    pub set_error: Option<String>,
}

#[derive(Template)]
#[template(path = "onboarding/discovery.html")]
pub struct DiscoveryStepTemplate {
    pub ctx: PageContext,
    pub nav: StepNav,
    pub options: Vec<ChoiceView>,
    pub show_other: bool,
    pub other: FieldView,
    pub set_error: Option<String>,
}

#[derive(Template)]
#[template(path = "onboarding/complete.html")]
pub struct CompleteTemplate {
    pub ctx: PageContext,
}
