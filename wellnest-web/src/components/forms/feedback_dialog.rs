use leptos::ev::MouseEvent;
use leptos::*;
use wellnest::{Feedback, Outcome};

use crate::base::state::PageContext;
use crate::base::timer::ScheduledTask;

fn dialog_title(feedback: &Feedback) -> &'static str {
    match feedback.outcome() {
        Outcome::Success => "You're on the list!",
        Outcome::Error => "Something went wrong",
    }
}

fn dialog_icon(feedback: &Feedback) -> &'static str {
    match feedback.outcome() {
        Outcome::Success => "dialog-icon fi fi-rr-check-circle",
        Outcome::Error => "dialog-icon fi fi-rr-cross-circle",
    }
}

/// Result dialog, used instead of the inline message when the page is
/// configured for dialog feedback.
#[component]
pub fn FeedbackDialog() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.state;
    let feedback = page.feedback();
    let auto_dismiss = ctx.workflow.options().dialog_auto_dismiss;

    let dismiss_task = ScheduledTask::new();
    create_effect(move |_| match (feedback.get(), auto_dismiss) {
        (Some(_), Some(delay)) => {
            dismiss_task.schedule(delay, move || page.dismiss_feedback())
        }
        _ => dismiss_task.cancel(),
    });

    let dismiss = move |_| {
        dismiss_task.cancel();
        page.dismiss_feedback();
    };

    move || {
        feedback.get().map(|feedback| {
            view! {
                <div class="dialog-overlay" on:click=dismiss>
                    <div
                        class="dialog"
                        class:error=feedback.is_error()
                        role="alertdialog"
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    >
                        <i class=dialog_icon(&feedback)></i>
                        <h3>{dialog_title(&feedback)}</h3>
                        <p>{feedback.message().to_string()}</p>
                        <button type="button" class="dialog-btn" on:click=dismiss>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
