use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use wellnest::{FeedbackStyle, ModalKind};

use crate::base::state::{PageContext, PageState, PageWorkflow};
use crate::components::forms::{
    FeedbackDialog, UserSignupForm, VendorSignupForm,
};
use crate::components::{Analytics, LandingPage, Modal};
use crate::vars::{PAGE_DESCRIPTION, PAGE_TITLE};

#[component]
pub fn App(workflow: Rc<PageWorkflow>) -> impl IntoView {
    provide_meta_context();
    let options = workflow.options().clone();
    let state = PageState::new();
    provide_context(PageContext { state, workflow });

    let active_modal = state.active_modal();
    let close = move |_: ()| state.close_modal();

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <LandingPage />
        // at most one modal, whichever is active
        {move || match active_modal.get() {
            Some(ModalKind::User) => view! {
                <Modal title=ModalKind::User.title() on_close=close>
                    <UserSignupForm />
                </Modal>
            }.into_view(),
            Some(ModalKind::Vendor) => view! {
                <Modal title=ModalKind::Vendor.title() on_close=close>
                    <VendorSignupForm />
                </Modal>
            }.into_view(),
            None => ().into_view(),
        }}
        {(options.feedback_style == FeedbackStyle::Dialog).then(|| view! { <FeedbackDialog /> })}
        {options.analytics.then(|| view! { <Analytics /> })}
    }
}
