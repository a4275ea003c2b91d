//! # Contact form
//!
//! Per-field validation on blur and input, a simulated submission and a timed reset.
//!
//! ```text
//! Editing --submit (all valid)--> Submitting --delay--> Sent --reset delay--> Editing
//! ```

use crate::notification::Notice;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::task::Task;
use crate::validation::{self, ValidationError};
use aqua_domain::constants::{FORM_INVALID, FORM_SENT, SUBMIT_LABEL, SUBMIT_LOADING_LABEL};
use aqua_domain::form::FieldId;
use std::time::Duration;
use tracing::{debug, info, warn};

const INVALID_BORDER: &str = "#ff6b6b";
const NEUTRAL_BORDER: &str = "rgba(255, 255, 255, 0.2)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FieldState {
    /// Inline border colour; untouched fields keep the stylesheet default.
    #[must_use]
    pub const fn border_color(&self, touched: bool) -> Option<&'static str> {
        match (&self.error, touched) {
            (Some(_), _) => Some(INVALID_BORDER),
            (None, true) => Some(NEUTRAL_BORDER),
            (None, false) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting { completion: TimerHandle },
    Sent { reset: TimerHandle },
}

/// What a submit attempt led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; every failing field now shows its error.
    Rejected(Notice),
    /// Valid; completion is scheduled.
    Started,
    /// A submission is already in flight or being shown.
    Busy,
}

/// Values handed to the (simulated) backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ContactForm {
    fields: [FieldState; 5],
    touched: [bool; 5],
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self { fields: Default::default(), touched: [false; 5], phase: FormPhase::Editing }
    }
}

impl ContactForm {
    #[must_use]
    pub const fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id as usize]
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Stores `value`; re-validates only when the field already shows an error.
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) {
        let field = &mut self.fields[id as usize];
        field.value = value.into();
        if field.error.is_some() {
            self.check(id);
        }
    }

    pub fn blur(&mut self, id: FieldId) -> bool {
        self.check(id)
    }

    fn check(&mut self, id: FieldId) -> bool {
        let field = &mut self.fields[id as usize];
        self.touched[id as usize] = true;
        field.error = validation::validate(id, &field.value).err();
        field.error.is_none()
    }

    /// Validates every field and, when all pass, schedules the completion after `delay`.
    pub fn submit(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        now: Duration,
        delay: Duration,
    ) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            warn!(phase = ?self.phase, "Submit ignored while a submission is pending");
            return SubmitOutcome::Busy;
        }

        // Evaluate all fields so every error becomes visible at once.
        let failed = FieldId::ALL.into_iter().filter(|id| !self.check(*id)).count();
        if failed > 0 {
            debug!(failed, "Form rejected");
            return SubmitOutcome::Rejected(Notice::error(FORM_INVALID));
        }

        let completion = scheduler.schedule(now, delay, Task::CompleteSubmission);
        self.phase = FormPhase::Submitting { completion };
        debug!("Form submitting");
        SubmitOutcome::Started
    }

    /// Timer callback: the simulated request succeeded.
    pub fn complete(
        &mut self,
        scheduler: &mut Scheduler<Task>,
        now: Duration,
        reset_delay: Duration,
    ) -> Option<Notice> {
        if !matches!(self.phase, FormPhase::Submitting { .. }) {
            return None;
        }

        let submission = self.submission();
        info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            subject = %submission.subject,
            message = %submission.message,
            "Form submitted"
        );

        let reset = scheduler.schedule(now, reset_delay, Task::ResetForm);
        self.phase = FormPhase::Sent { reset };
        Some(Notice::success(FORM_SENT))
    }

    /// Timer callback: back to an empty form.
    pub fn reset(&mut self) {
        self.fields = Default::default();
        self.touched = [false; 5];
        self.phase = FormPhase::Editing;
        debug!("Form reset");
    }

    #[must_use]
    pub fn submission(&self) -> Submission {
        let value = |id: FieldId| self.field(id).value.clone();
        Submission {
            name: value(FieldId::Name),
            email: value(FieldId::Email),
            phone: value(FieldId::Phone),
            subject: value(FieldId::Subject),
            message: value(FieldId::Message),
        }
    }

    #[must_use]
    pub const fn border_color(&self, id: FieldId) -> Option<&'static str> {
        self.fields[id as usize].border_color(self.touched[id as usize])
    }

    /// Inline error element: shown with its message while the field is invalid.
    #[must_use]
    pub fn error_text(&self, id: FieldId) -> Option<&'static str> {
        self.field(id).error.map(|e| e.message())
    }

    #[must_use]
    pub const fn is_form_visible(&self) -> bool {
        !matches!(self.phase, FormPhase::Sent { .. })
    }

    #[must_use]
    pub const fn is_success_visible(&self) -> bool {
        matches!(self.phase, FormPhase::Sent { .. })
    }

    /// The button stays in its loading state until the form resets.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !matches!(self.phase, FormPhase::Editing)
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_loading() { SUBMIT_LOADING_LABEL } else { SUBMIT_LABEL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.input(FieldId::Name, "Ayesha");
        form.input(FieldId::Email, "ayesha@example.com");
        form.input(FieldId::Subject, "order");
        form.input(FieldId::Message, "Please deliver two crates.");
        form
    }

    #[test]
    fn input_revalidates_only_after_an_error() {
        let mut form = ContactForm::default();
        form.input(FieldId::Name, "Jo");
        assert!(form.field(FieldId::Name).error.is_none(), "typing alone shows no error");
        assert_eq!(form.border_color(FieldId::Name), None);

        assert!(!form.blur(FieldId::Name));
        assert_eq!(form.error_text(FieldId::Name), Some("Name must be at least 3 characters long"));
        assert_eq!(form.border_color(FieldId::Name), Some(INVALID_BORDER));

        form.input(FieldId::Name, "Joe");
        assert_eq!(form.error_text(FieldId::Name), None);
        assert_eq!(form.border_color(FieldId::Name), Some(NEUTRAL_BORDER));
    }

    #[test]
    fn invalid_submit_shows_every_error() {
        let mut scheduler = Scheduler::new();
        let mut form = ContactForm::default();
        form.input(FieldId::Name, "Joe");

        let outcome = form.submit(&mut scheduler, Duration::ZERO, Duration::from_secs(2));
        assert_eq!(outcome, SubmitOutcome::Rejected(Notice::error(FORM_INVALID)));
        assert!(scheduler.is_empty());

        assert_eq!(form.error_text(FieldId::Name), None);
        assert!(form.error_text(FieldId::Email).is_some());
        assert_eq!(form.error_text(FieldId::Phone), None, "empty phone is fine");
        assert!(form.error_text(FieldId::Subject).is_some());
        assert!(form.error_text(FieldId::Message).is_some());
    }

    #[test]
    fn second_submit_is_ignored() {
        let mut scheduler = Scheduler::new();
        let mut form = filled();

        let delay = Duration::from_secs(2);
        assert_eq!(form.submit(&mut scheduler, Duration::ZERO, delay), SubmitOutcome::Started);
        assert_eq!(form.submit(&mut scheduler, Duration::ZERO, delay), SubmitOutcome::Busy);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(form.submit_label(), SUBMIT_LOADING_LABEL);
    }

    #[test]
    fn complete_then_reset() {
        let mut scheduler = Scheduler::new();
        let mut form = filled();
        form.submit(&mut scheduler, Duration::ZERO, Duration::from_secs(2));

        let notice = form
            .complete(&mut scheduler, Duration::from_secs(2), Duration::from_secs(3))
            .expect("submitting");
        assert_eq!(notice, Notice::success(FORM_SENT));
        assert!(!form.is_form_visible());
        assert!(form.is_success_visible());
        assert_eq!(form.submission().subject, "order");

        form.reset();
        assert!(form.is_form_visible());
        assert_eq!(form.field(FieldId::Name).value, "");
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }
}
