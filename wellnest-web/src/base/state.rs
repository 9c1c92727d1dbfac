use std::rc::Rc;
use std::time::Duration;

use leptos::*;
use wellnest::{
    CloseTicket, Feedback, LandingState, ModalKind, PostgrestSink, StateCell,
    SubmissionWorkflow, SubmitOutcome, UserFormEdit, VendorFormEdit,
};

use super::timer::{BrowserTimer, ScheduledTask};
use crate::api::FetchTransport;

pub type PageWorkflow =
    SubmissionWorkflow<PostgrestSink<FetchTransport>, BrowserTimer>;

/// Reactive handle on the page state plus the timer that closes the modal
/// after a successful submission.
#[derive(Clone, Copy)]
pub struct PageState {
    state: RwSignal<LandingState>,
    close_task: ScheduledTask,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(LandingState::new()),
            close_task: ScheduledTask::new(),
        }
    }

    /// Tracked read of the state.
    pub fn with<R>(&self, f: impl FnOnce(&LandingState) -> R) -> R {
        self.state.with(f)
    }

    pub fn get_untracked(&self) -> LandingState {
        self.state.get_untracked()
    }

    pub fn active_modal(&self) -> Memo<Option<ModalKind>> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.active_modal()))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.is_submitting())).into()
    }

    pub fn feedback(&self) -> Signal<Option<Feedback>> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.feedback().cloned())).into()
    }

    /// Feedback that belongs to the form of `kind`.
    pub fn feedback_for(&self, kind: ModalKind) -> Signal<Option<Feedback>> {
        let feedback = self.feedback();
        Signal::derive(move || feedback.get().filter(|f| f.kind() == kind))
    }

    pub fn open_modal(&self, kind: ModalKind) {
        self.close_task.cancel();
        self.state.update(|s| s.open_modal(kind));
    }

    pub fn close_modal(&self) {
        self.close_task.cancel();
        self.state.update(|s| s.close_modal());
    }

    pub fn dismiss_feedback(&self) {
        self.state.update(|s| s.dismiss_feedback());
    }

    pub fn update_user(&self, edit: UserFormEdit) {
        self.state.update(|s| {
            s.update_user_field(edit);
        });
    }

    pub fn update_vendor(&self, edit: VendorFormEdit) {
        self.state.update(|s| {
            s.update_vendor_field(edit);
        });
    }

    pub fn handle_outcome(&self, outcome: SubmitOutcome) {
        if let SubmitOutcome::Succeeded {
            close_after: Some((delay, ticket)),
        } = outcome
        {
            self.arm_close(delay, ticket);
        }
    }

    fn arm_close(&self, delay: Duration, ticket: CloseTicket) {
        let state = self.state;
        self.close_task.schedule(delay, move || {
            state.try_update(|s| s.fire_close(ticket));
        });
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell for PageState {
    fn with_state<R>(
        &self,
        f: impl FnOnce(&mut LandingState) -> R,
    ) -> Option<R> {
        self.state.try_update(f)
    }
}

/// Provided once by `App`, read by every component.
#[derive(Clone)]
pub struct PageContext {
    pub state: PageState,
    pub workflow: Rc<PageWorkflow>,
}

impl PageContext {
    pub fn submit(&self, kind: ModalKind) {
        let ctx = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match kind {
                ModalKind::User => ctx.workflow.submit_user(&ctx.state).await,
                ModalKind::Vendor => {
                    ctx.workflow.submit_vendor(&ctx.state).await
                }
            };
            ctx.state.handle_outcome(outcome);
        });
    }
}
