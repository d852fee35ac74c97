//! The step sequencer. Owns the form state, the current step index, the
//! submission identifier, and the in-flight save guard.
//!
//! Persistence is a hand-off: `advance()` returns a `SaveRequest` on a valid
//! step, the caller performs the insert/update, then reports back with
//! `save_succeeded`/`save_failed`. While a save is outstanding, further
//! `advance()` calls are no-ops.

use crate::models::submission::{Submission, SubmissionDraft};

use super::state::FormState;
use super::validate::validate_step;
use super::{DATA_STEPS, STEP_COUNT};

/// A pending create (id None) or update (id Some) of the full record.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub id: Option<i64>,
    pub draft: SubmissionDraft,
}

#[derive(Debug, PartialEq)]
pub enum AdvanceAction {
    /// Current step failed validation; errors applied to the form state.
    Invalid,
    /// Step validated; persist this record, then report the outcome.
    Save(SaveRequest),
    /// A save is already in flight; nothing was done.
    Busy,
    /// Already on the completion step; nothing to advance to.
    AtEnd,
}

#[derive(Debug, PartialEq)]
pub enum RetreatAction {
    /// Moved back to the given step index.
    SteppedBack(usize),
    /// Already on step 0: the hosting shell should navigate home instead.
    ExitHome,
    /// The completion step has no back action.
    AtEnd,
}

/// Highest step the record has earned: the first data step whose required
/// fields are missing or invalid, or the completion step when every data
/// step validates.
pub fn fast_forward(draft: &SubmissionDraft) -> usize {
    for step in 0..DATA_STEPS {
        if !validate_step(step, draft).is_empty() {
            return step;
        }
    }
    STEP_COUNT - 1
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: usize,
    id: Option<i64>,
    in_flight: bool,
    state: FormState,
}

impl Wizard {
    /// A fresh wizard: step 0, no identifier, no errors.
    pub fn new() -> Self {
        Wizard {
            step: 0,
            id: None,
            in_flight: false,
            state: FormState::new(),
        }
    }

    /// Rehydrate from a stored record and fast-forward to the first step
    /// with missing data.
    pub fn resume(record: &Submission) -> Self {
        let step = fast_forward(&record.draft);
        Wizard {
            step,
            id: Some(record.id),
            in_flight: false,
            state: FormState::from_draft(record.draft.clone()),
        }
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn submission_id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn is_complete(&self) -> bool {
        self.step == STEP_COUNT - 1
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Move to a requested step, clamped to what the stored data has already
    /// earned. Lets a visitor revisit earlier steps without re-validating,
    /// but never skip ahead of incomplete data.
    pub fn jump_to(&mut self, requested: usize) {
        self.step = requested.min(fast_forward(self.state.draft()));
    }

    /// Validate the current step and, if it passes, hand back a save
    /// request. The step index only moves once the caller reports a
    /// successful save.
    pub fn advance(&mut self) -> AdvanceAction {
        if self.is_complete() {
            return AdvanceAction::AtEnd;
        }
        if self.in_flight {
            return AdvanceAction::Busy;
        }

        let errors = validate_step(self.step, self.state.draft());
        if !errors.is_empty() {
            self.state.set_errors(errors);
            return AdvanceAction::Invalid;
        }

        self.state.clear_errors();
        self.in_flight = true;
        AdvanceAction::Save(SaveRequest {
            id: self.id,
            draft: self.state.draft().clone(),
        })
    }

    /// The save issued by the last `advance()` succeeded. Stores the
    /// assigned identifier (first save only; it is immutable afterwards)
    /// and moves forward one step.
    pub fn save_succeeded(&mut self, id: i64) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        if self.id.is_none() {
            self.id = Some(id);
        }
        self.step = (self.step + 1).min(STEP_COUNT - 1);
    }

    /// The save failed. The step index and entered data are retained; the
    /// visitor may retry. No automatic retry.
    pub fn save_failed(&mut self) {
        self.in_flight = false;
    }

    /// Step back without validating or persisting.
    pub fn retreat(&mut self) -> RetreatAction {
        if self.is_complete() {
            return RetreatAction::AtEnd;
        }
        if self.step == 0 {
            return RetreatAction::ExitHome;
        }
        self.step -= 1;
        RetreatAction::SteppedBack(self.step)
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Wizard::new()
    }
}
