use leptos::*;
use wellnest::ModalKind;

use super::buttons::ClickButton;
use super::categories::CategoryGrid;
use crate::base::state::PageContext;

const INTRO: &str = "Wellnest is your one-stop online marketplace for all \
things wellness—think of us as the Treatwell for the wellness industry. For \
users, get access to curated recommendations tailored to your wellness goals. \
For vendors, get access to a platform that will help you grow your business.";

const CALL_TO_ACTION: &str =
    "Sign up below to receive exclusive early-access when we launch.";

#[component]
pub fn LandingPage() -> impl IntoView {
    let page = expect_context::<PageContext>().state;

    view! {
        <div class="landing-page">
            <div class="content">
                <h1>"Welcome to Wellnest"</h1>
                <p>{INTRO}</p>
                <p>{CALL_TO_ACTION}</p>
                <CategoryGrid />
                <div class="button-container">
                    <ClickButton
                        text="User Sign Up"
                        style_class="btn btn-user"
                        on_click=move |_| page.open_modal(ModalKind::User)
                    />
                    <ClickButton
                        text="Vendor Sign Up"
                        style_class="btn btn-vendor"
                        on_click=move |_| page.open_modal(ModalKind::Vendor)
                    />
                </div>
            </div>
            <div class="hero-image">
                <img src="/9116229.jpg" alt="Wellnest Platform" />
            </div>
        </div>
    }
}
