//! Multi-step lead-capture wizard: form state, per-step validation, and the
//! step sequencer. Pure and synchronous; persistence is handed off to the
//! caller as explicit save requests so the no-duplicate-save invariant is
//! testable without an HTTP harness.

pub mod state;
pub mod validate;
pub mod wizard;

pub use state::{FIELDS, FieldError, FieldValue, FormState};
pub use wizard::{AdvanceAction, RetreatAction, SaveRequest, Wizard, fast_forward};

/// Total wizard states. The last index is the completion view.
pub const STEP_COUNT: usize = 5;

/// Steps 0..DATA_STEPS carry form fields and persist on advance.
pub const DATA_STEPS: usize = 4;

/// Selecting this option id in a choice set makes the paired free-text
/// field required.
pub const OTHER_SENTINEL: &str = "other";

pub const STEP_TITLES: [&str; STEP_COUNT] = [
    "Tell us about your venue",
    "How can we reach you?",
    "What excites you most about this tool?",
    "How do you usually find artists?",
    "Thank you!",
];

pub struct ChoiceOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const EXCITEMENT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        id: "track_shows",
        label: "Track Local Shows",
        description: "See which artists are drawing crowds in your area that match your venue's size.",
    },
    ChoiceOption {
        id: "artist_insights",
        label: "Artist Performance Insights",
        description: "Get deep analytics on an artist's streaming, socials, and listener demographics.",
    },
    ChoiceOption {
        id: "rising_talent",
        label: "Find Rising Talent",
        description: "Discover and track new artists you haven't heard of before.",
    },
    ChoiceOption {
        id: "booking_dashboard",
        label: "Your Booking Dashboard",
        description: "View your past shows, performance trends, and where to experiment next, all in one place.",
    },
    ChoiceOption {
        id: "other",
        label: "Other",
        description: "Tell us what excites you most",
    },
];

pub const DISCOVERY_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { id: "social", label: "Social Media", description: "" },
    ChoiceOption { id: "agent", label: "Agent", description: "" },
    ChoiceOption { id: "word", label: "Word of Mouth", description: "" },
    ChoiceOption { id: "platform", label: "Booking Platform", description: "" },
    ChoiceOption { id: "other", label: "Other (please specify)", description: "" },
];

/// Field names owned by each data step, in display order.
pub fn step_fields(step: usize) -> &'static [&'static str] {
    match step {
        0 => &["venue_name", "venue_location", "venue_capacity"],
        1 => &[
            "first_name",
            "last_name",
            "role_at_venue",
            "contact_method",
            "contact_value",
        ],
        2 => &["tool_excitement", "tool_excitement_other"],
        3 => &["artist_discovery_methods", "artist_discovery_other"],
        _ => &[],
    }
}
