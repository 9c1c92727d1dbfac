use std::fmt;

use crate::lead::{UserForm, UserFormEdit, VendorForm, VendorFormEdit};
use crate::options::{FeedbackStyle, PageOptions};

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your submission has been recorded.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    User,
    Vendor,
}

impl ModalKind {
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::User => "User Registration",
            ModalKind::Vendor => "Vendor Registration",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::User => "user",
            ModalKind::Vendor => "vendor",
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    kind: ModalKind,
    outcome: Outcome,
    message: String,
}

impl Feedback {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.outcome == Outcome::Error
    }
}

/// Where a single form sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
    Submitting,
}

/// Handed out when a delayed close is scheduled. Only the most recent ticket
/// can close the modal; opening or closing a modal invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// All page state: which modal is open, the two forms and the last
/// submission result. Lives in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingState {
    active_modal: Option<ModalKind>,
    submitting: Option<ModalKind>,
    feedback: Option<Feedback>,
    user_form: UserForm,
    vendor_form: VendorForm,
    pending_close: Option<CloseTicket>,
    tickets_issued: u64,
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_modal(&self) -> Option<ModalKind> {
        self.active_modal
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn user_form(&self) -> &UserForm {
        &self.user_form
    }

    pub fn vendor_form(&self) -> &VendorForm {
        &self.vendor_form
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.pending_close = None;
        self.active_modal = Some(kind);
    }

    pub fn close_modal(&mut self) {
        self.pending_close = None;
        self.active_modal = None;
        self.feedback = None;
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback = None;
    }

    /// Returns false when the edit was dropped because a request is in
    /// flight.
    pub fn update_user_field(&mut self, edit: UserFormEdit) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.user_form.apply(edit);
        true
    }

    pub fn update_vendor_field(&mut self, edit: VendorFormEdit) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.vendor_form.apply(edit);
        true
    }

    pub fn form_phase(&self, kind: ModalKind) -> FormPhase {
        if self.submitting == Some(kind) {
            return FormPhase::Submitting;
        }
        let untouched = match kind {
            ModalKind::User => self.user_form == UserForm::default(),
            ModalKind::Vendor => self.vendor_form == VendorForm::default(),
        };
        if untouched {
            FormPhase::Idle
        } else {
            FormPhase::Editing
        }
    }

    /// Enters the submitting state. Returns false, changing nothing, when a
    /// submission is already in flight.
    pub fn begin_submission(&mut self, kind: ModalKind) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.submitting = Some(kind);
        self.pending_close = None;
        self.feedback = None;
        true
    }

    /// Records a confirmed insert. Returns a ticket when the modal should be
    /// closed later via [`LandingState::fire_close`].
    pub fn finish_success(
        &mut self,
        kind: ModalKind,
        options: &PageOptions,
    ) -> Option<CloseTicket> {
        self.feedback = Some(Feedback {
            kind,
            outcome: Outcome::Success,
            message: SUCCESS_MESSAGE.to_string(),
        });
        match kind {
            ModalKind::User => self.user_form = UserForm::default(),
            ModalKind::Vendor => self.vendor_form = VendorForm::default(),
        }

        let showing = self.active_modal == Some(kind);
        let inline = options.feedback_style == FeedbackStyle::Inline;
        let mut ticket = None;
        if options.closes_immediately() {
            if showing {
                self.active_modal = None;
            }
            if inline {
                self.feedback = None;
            }
        } else if showing {
            ticket = Some(self.issue_ticket());
        } else if inline {
            self.feedback = None;
        }

        self.submitting = None;
        ticket
    }

    pub fn finish_failure(&mut self, kind: ModalKind, message: &str) {
        self.feedback = Some(Feedback {
            kind,
            outcome: Outcome::Error,
            message: message.to_string(),
        });
        self.submitting = None;
    }

    /// Closes the modal if `ticket` is still the pending one.
    pub fn fire_close(&mut self, ticket: CloseTicket) -> bool {
        if self.pending_close != Some(ticket) {
            return false;
        }
        self.close_modal();
        true
    }

    fn issue_ticket(&mut self) -> CloseTicket {
        self.tickets_issued += 1;
        let ticket = CloseTicket(self.tickets_issued);
        self.pending_close = Some(ticket);
        ticket
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::lead::{UsageFrequency, UsesSimilar};

    fn inline_options() -> PageOptions {
        PageOptions::default()
    }

    #[test]
    fn test_initial_state() {
        let state = LandingState::new();
        assert_eq!(state.active_modal(), None);
        assert!(!state.is_submitting());
        assert!(state.feedback().is_none());
        assert_eq!(state.user_form().usage, UsageFrequency::NotSure);
        assert_eq!(state.vendor_form().uses_similar, UsesSimilar::No);
        assert_eq!(state.form_phase(ModalKind::User), FormPhase::Idle);
    }

    #[test]
    fn test_switching_modals_keeps_both_forms() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::User);
        state.update_user_field(UserFormEdit::Email("a@b.com".to_string()));
        state.close_modal();
        state.open_modal(ModalKind::Vendor);
        state.update_vendor_field(VendorFormEdit::BusinessName(
            "Calm".to_string(),
        ));
        state.open_modal(ModalKind::User);

        assert_eq!(state.active_modal(), Some(ModalKind::User));
        assert_eq!(state.user_form().email, "a@b.com");
        assert_eq!(state.vendor_form().business_name, "Calm");
        assert_eq!(state.form_phase(ModalKind::User), FormPhase::Editing);
    }

    #[test]
    fn test_close_clears_feedback() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::User);
        assert!(state.begin_submission(ModalKind::User));
        state.finish_failure(ModalKind::User, "nope");
        assert!(state.feedback().unwrap().is_error());

        state.close_modal();
        assert_eq!(state.active_modal(), None);
        assert!(state.feedback().is_none());
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut state = LandingState::new();
        assert!(state.begin_submission(ModalKind::Vendor));
        assert!(!state.begin_submission(ModalKind::Vendor));
        assert!(!state.begin_submission(ModalKind::User));
        assert!(
            !state.update_user_field(UserFormEdit::Email("x".to_string()))
        );
        assert_eq!(state.user_form().email, "");
        assert_eq!(state.form_phase(ModalKind::Vendor), FormPhase::Submitting);
    }

    #[test]
    fn test_delayed_close_ticket() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::User);
        state.update_user_field(UserFormEdit::Email("a@b.com".to_string()));
        state.begin_submission(ModalKind::User);

        let ticket = state
            .finish_success(ModalKind::User, &inline_options())
            .expect("delayed close scheduled");
        assert!(!state.is_submitting());
        assert_eq!(state.active_modal(), Some(ModalKind::User));
        assert_eq!(state.feedback().unwrap().message(), SUCCESS_MESSAGE);
        assert_eq!(state.form_phase(ModalKind::User), FormPhase::Idle);

        assert!(state.fire_close(ticket));
        assert_eq!(state.active_modal(), None);
        assert!(state.feedback().is_none());
    }

    #[test]
    fn test_stale_ticket_does_nothing() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::User);
        state.begin_submission(ModalKind::User);
        let ticket =
            state.finish_success(ModalKind::User, &inline_options()).unwrap();

        // user closes and reopens before the timer fires
        state.close_modal();
        state.open_modal(ModalKind::Vendor);
        assert!(!state.fire_close(ticket));
        assert_eq!(state.active_modal(), Some(ModalKind::Vendor));
    }

    #[test]
    fn test_immediate_close_with_dialog() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::Vendor);
        state.begin_submission(ModalKind::Vendor);
        let ticket =
            state.finish_success(ModalKind::Vendor, &PageOptions::dialog());

        assert!(ticket.is_none());
        assert_eq!(state.active_modal(), None);
        // dialog keeps the message after the modal is gone
        assert_eq!(state.feedback().unwrap().outcome(), Outcome::Success);
        state.dismiss_feedback();
        assert!(state.feedback().is_none());
    }

    #[test]
    fn test_immediate_close_inline_drops_message() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::User);
        state.begin_submission(ModalKind::User);
        let options = inline_options().with_close_delay(Duration::ZERO);
        assert!(state.finish_success(ModalKind::User, &options).is_none());
        assert_eq!(state.active_modal(), None);
        assert!(state.feedback().is_none());
    }

    #[test]
    fn test_success_after_user_closed_modal() {
        let mut state = LandingState::new();
        state.open_modal(ModalKind::User);
        state.update_user_field(UserFormEdit::Email("a@b.com".to_string()));
        state.begin_submission(ModalKind::User);
        state.close_modal();

        let ticket = state.finish_success(ModalKind::User, &inline_options());
        assert!(ticket.is_none());
        assert_eq!(state.active_modal(), None);
        assert!(state.feedback().is_none());
        assert_eq!(state.user_form(), &UserForm::default());
    }
}
