use leptos::ev::SubmitEvent;
use leptos::*;
use wellnest::{FeedbackStyle, ModalKind, UsageFrequency, UserFormEdit};

use super::{SubmissionStatusView, TextInput};
use crate::base::state::PageContext;
use crate::components::buttons::{FormButton, PillOptions};

const USAGE_QUESTION: &str =
    "How many times per month would you use an app like this?";

#[component]
pub fn UserSignupForm() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.state;
    let options = ctx.workflow.options().clone();
    let is_submitting = page.is_submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit(ModalKind::User);
    };

    let usage_options: Vec<(UsageFrequency, &'static str)> = UsageFrequency::ALL
        .iter()
        .map(|usage| (*usage, usage.as_str()))
        .collect();

    view! {
        <form class="modal-form" on:submit=on_submit>
            {(options.feedback_style == FeedbackStyle::Inline).then(|| view! {
                <SubmissionStatusView feedback=page.feedback_for(ModalKind::User) />
            })}
            <TextInput
                id="user-email"
                label="Email Address"
                input_type="email"
                value=Signal::derive(move || page.with(|s| s.user_form().email.clone()))
                on_input=move |value: String| page.update_user(UserFormEdit::Email(value))
                disabled=is_submitting
            />
            {options.include_location_field.then(|| view! {
                <TextInput
                    id="user-location"
                    label="Location"
                    value=Signal::derive(move || page.with(|s| s.user_form().location.clone()))
                    on_input=move |value: String| page.update_user(UserFormEdit::Location(value))
                    disabled=is_submitting
                />
            })}
            <div class="form-group">
                <label>{USAGE_QUESTION}</label>
                <PillOptions
                    options=usage_options
                    selected=Signal::derive(move || page.with(|s| s.user_form().usage))
                    on_select=move |usage: UsageFrequency| page.update_user(UserFormEdit::Usage(usage))
                    disabled=is_submitting
                />
            </div>
            {FormButton::default().into_view(is_submitting)}
        </form>
    }
}
