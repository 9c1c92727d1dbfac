use leptos::ev::SubmitEvent;
use leptos::*;
use wellnest::{FeedbackStyle, ModalKind, UsesSimilar, VendorFormEdit};

use super::{SubmissionStatusView, TextInput};
use crate::base::state::PageContext;
use crate::components::buttons::{FormButton, PillOptions};

const SIMILAR_QUESTION: &str = "Do you use similar products like this?";

#[component]
pub fn VendorSignupForm() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let page = ctx.state;
    let options = ctx.workflow.options().clone();
    let is_submitting = page.is_submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit(ModalKind::Vendor);
    };

    let uses_similar =
        Signal::derive(move || page.with(|s| s.vendor_form().uses_similar));
    let similar_options: Vec<(UsesSimilar, &'static str)> = UsesSimilar::ALL
        .iter()
        .map(|option| (*option, option.label()))
        .collect();

    view! {
        <form class="modal-form" on:submit=on_submit>
            {(options.feedback_style == FeedbackStyle::Inline).then(|| view! {
                <SubmissionStatusView feedback=page.feedback_for(ModalKind::Vendor) />
            })}
            <TextInput
                id="business-name"
                label="Business Name"
                value=Signal::derive(move || page.with(|s| s.vendor_form().business_name.clone()))
                on_input=move |value: String| page.update_vendor(VendorFormEdit::BusinessName(value))
                disabled=is_submitting
            />
            <TextInput
                id="vendor-email"
                label="Email Address"
                input_type="email"
                value=Signal::derive(move || page.with(|s| s.vendor_form().email.clone()))
                on_input=move |value: String| page.update_vendor(VendorFormEdit::Email(value))
                disabled=is_submitting
            />
            {options.include_location_field.then(|| view! {
                <TextInput
                    id="vendor-location"
                    label="Location"
                    value=Signal::derive(move || page.with(|s| s.vendor_form().location.clone()))
                    on_input=move |value: String| page.update_vendor(VendorFormEdit::Location(value))
                    disabled=is_submitting
                />
            })}
            <div class="form-group">
                <label>{SIMILAR_QUESTION}</label>
                <PillOptions
                    options=similar_options
                    selected=uses_similar
                    on_select=move |option: UsesSimilar| page.update_vendor(VendorFormEdit::UsesSimilar(option))
                    disabled=is_submitting
                />
            </div>
            <Show when=move || uses_similar.get() == UsesSimilar::Yes>
                <TextInput
                    id="other-providers"
                    label="Name of other provider(s)"
                    required=false
                    placeholder="Enter provider names..."
                    value=Signal::derive(move || page.with(|s| s.vendor_form().other_providers.clone()))
                    on_input=move |value: String| page.update_vendor(VendorFormEdit::OtherProviders(value))
                    disabled=is_submitting
                />
            </Show>
            {FormButton::default().into_view(is_submitting)}
        </form>
    }
}
